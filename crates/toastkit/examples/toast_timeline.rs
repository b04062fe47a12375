//! Scripted toast timeline against an in-memory host.
//!
//! This example shows how to:
//! - Register a root screen and present a modal on top of it
//! - Show toasts at the top, middle and bottom of a host
//! - Replace a visible toast and retrigger another
//! - Drive the controller with fixed frame steps
//!
//! Run with: RUST_LOG=toastkit=debug cargo run -p toastkit --example toast_timeline
//!
//! Set `TOASTKIT_PROFILE=1` to serve puffin data on port 8585.

use std::time::Duration;

use toastkit::{
    ImagePosition, SceneHost, ToastController, ToastImage, ToastOptions, ToastPosition,
    ToastRequest,
};
use toastkit_core::profiling::{ProfilingBackend, init_profiling};

const FRAME: Duration = Duration::from_millis(16);

fn run_for(toasts: &mut ToastController<SceneHost>, duration: Duration) {
    let frames = duration.as_millis() / FRAME.as_millis();
    for _ in 0..frames {
        toastkit_core::profiling::new_frame();
        toasts.advance(FRAME);
        let now = toasts.now();
        for event in toasts.drain_events() {
            println!("[{:>10.3?}] {:?}", now, event);
        }
    }
}

fn main() {
    toastkit_core::logging::init();
    if std::env::var_os("TOASTKIT_PROFILE").is_some() {
        init_profiling(ProfilingBackend::PuffinHttp);
    }

    let mut toasts = ToastController::new();
    let root = toasts.add_host(SceneHost::new(375.0, 667.0));
    toasts.screens_mut().set_root(root);

    println!("=== Bottom toast on the root screen ===\n");
    let saved = toasts
        .present(ToastRequest::new("Saved").image(ToastImage::new("check", 24.0, 24.0)))
        .expect("root screen is registered");
    run_for(&mut toasts, Duration::from_secs(1));
    if let Some(view) = toasts.host(root).and_then(|host| host.child(saved)) {
        println!("frame: {:?}\n", view.frame);
    }

    println!("=== Replacing it with a top toast ===\n");
    let top = ToastOptions::builder()
        .position(ToastPosition::Top)
        .image_position(ImagePosition::Right)
        .duration(Duration::from_secs(2))
        .build();
    let copied = toasts
        .present(
            ToastRequest::new("Copied to clipboard")
                .image(ToastImage::new("clipboard", 32.0, 24.0))
                .options(top),
        )
        .expect("root screen is registered");
    run_for(&mut toasts, Duration::from_secs(1));
    if let Some(view) = toasts.host(root).and_then(|host| host.child(copied)) {
        println!("frame: {:?}\n", view.frame);
    }

    println!("=== Retriggering it ===\n");
    toasts.show(copied);
    run_for(&mut toasts, Duration::from_secs(4));

    println!("=== Middle toast on a presented modal ===\n");
    let modal = toasts.add_host(SceneHost::new(320.0, 480.0));
    toasts.screens_mut().present(modal);
    let middle = ToastOptions::builder()
        .position(ToastPosition::Middle)
        .build();
    let long = "A longer message that wraps onto more than one line inside the toast bubble";
    let id = toasts
        .present(ToastRequest::new(long).options(middle))
        .expect("modal is registered");
    run_for(&mut toasts, Duration::from_millis(500));
    if let Some(view) = toasts.host(modal).and_then(|host| host.child(id)) {
        println!("frame: {:?}\n", view.frame);
    }

    println!("=== Dismissing the modal ===\n");
    toasts.screens_mut().dismiss();
    toasts.remove_host(modal);
    run_for(&mut toasts, Duration::from_millis(100));

    println!("idle: {}", toasts.is_idle());
}
