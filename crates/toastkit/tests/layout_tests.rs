//! Placement tests for attached toasts.

use std::time::Duration;

use toastkit::{
    HostId, ImagePosition, SceneHost, TOAST_WIDTH, ToastController, ToastImage, ToastOptions,
    ToastPosition, ToastRequest, ToastView,
};
use toastkit_core::geometry::{EdgeInsets, Size};

const HOST: Size<f32> = Size::new(375.0, 667.0);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn show(request: ToastRequest) -> ToastView {
    let mut controller = ToastController::new();
    let host: HostId = controller.add_host(SceneHost::new(HOST.width, HOST.height));
    let id = controller.present(request.host(host)).unwrap();
    controller.advance(Duration::from_millis(400));
    controller.host(host).unwrap().child(id).unwrap().clone()
}

#[test]
fn test_bottom_position_keeps_margin() {
    let options = ToastOptions::builder().margin(20.0).build();
    let view = show(ToastRequest::new("Hello").options(options));

    assert!(approx(HOST.height - view.frame.max_y(), 20.0));
    assert!(approx(view.frame.center().x, HOST.width / 2.0));
}

#[test]
fn test_top_position_keeps_margin() {
    let options = ToastOptions::builder()
        .position(ToastPosition::Top)
        .margin(12.0)
        .build();
    let view = show(ToastRequest::new("Hello").options(options));

    assert!(approx(view.frame.min_y(), 12.0));
}

#[test]
fn test_middle_position_is_centered() {
    let options = ToastOptions::builder()
        .position(ToastPosition::Middle)
        .build();
    let view = show(ToastRequest::new("Hello").options(options));

    assert!(approx(view.frame.center().y, HOST.height / 2.0));
    assert!(approx(view.frame.center().x, HOST.width / 2.0));
}

#[test]
fn test_height_stays_within_bounds() {
    let options = ToastOptions::builder().min_height(30.0).max_height(50.0).build();

    for words in [0, 1, 5, 20, 60, 200] {
        let message = vec!["toast"; words].join(" ");
        let view = show(ToastRequest::new(message).options(options.clone()));
        assert!(approx(view.frame.width, TOAST_WIDTH));
        assert!(
            view.frame.height >= 30.0 - 1e-3 && view.frame.height <= 50.0 + 1e-3,
            "{words} words gave height {}",
            view.frame.height
        );
    }
}

#[test]
fn test_label_is_inset() {
    let options = ToastOptions::builder()
        .content_insets(EdgeInsets::new(5.0, 9.0, 7.0, 11.0))
        .build();
    let view = show(ToastRequest::new("Hello").options(options));

    assert!(approx(view.label_frame.min_y(), 5.0));
    assert!(approx(view.label_frame.min_x(), 9.0));
    assert!(approx(view.frame.height - view.label_frame.max_y(), 7.0));
    assert!(approx(view.frame.width - view.label_frame.max_x(), 11.0));
}

#[test]
fn test_left_image_is_vertically_centered() {
    let options = ToastOptions::builder()
        .min_height(40.0)
        .max_height(60.0)
        .image_position(ImagePosition::Left)
        .build();
    let view = show(
        ToastRequest::new("This is an example message")
            .image(ToastImage::new("info", 48.0, 48.0))
            .options(options),
    );

    let image = view.image_frame.unwrap();
    assert!(approx(image.center().y, view.frame.height / 2.0));
    assert!(approx(2.0 * image.y + image.height, 40.0));
    assert!(approx(view.label_frame.min_x(), image.max_x() + 8.0));
}

#[test]
fn test_view_carries_styling() {
    let options = ToastOptions::builder()
        .corner_radius(12.0)
        .border_width(2.0)
        .build();
    let view = show(ToastRequest::new("Styled").options(options.clone()));

    assert_eq!(view.message, "Styled");
    assert_eq!(view.corner_radius, 12.0);
    assert_eq!(view.border_width, 2.0);
    assert_eq!(view.background_color, options.background_color);
    assert_eq!(view.font, options.message_font);
}
