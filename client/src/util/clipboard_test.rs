#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn copy_reports_failure_without_browser() {
    let method = block_on_ready(copy_text("https://dhek.app/board?board=e30="));
    assert_eq!(method, CopyMethod::Failed);
}

#[test]
fn labels_reflect_outcome() {
    assert_eq!(CopyMethod::Clipboard.label(), "Copied!");
    assert_eq!(CopyMethod::Legacy.label(), "Copied!");
    assert_eq!(CopyMethod::Failed.label(), "Copy failed");
    assert!(!CopyMethod::Failed.copied());
}

/// Poll a future that never pends (the off-browser path is synchronous).
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    let mut fut = std::pin::pin!(fut);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(out) => out,
        std::task::Poll::Pending => panic!("off-browser copy should complete immediately"),
    }
}
