#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use fixed_vec::prelude::*;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn mismatched_sizes_are_logged_with_both_lengths() {
    let logs = capture(|| {
        let err = Vector::from_points([1.0f64, 2.0])
            .add(&[1.0, 2.0, 3.0])
            .unwrap_err();
        assert_eq!(err, MismatchedSizeError::new(2, 3));
    });
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("rejecting operands with mismatched sizes"), "{logs}");
    assert!(logs.contains("lhs=2"), "{logs}");
    assert!(logs.contains("rhs=3"), "{logs}");
}

#[test]
fn normalizing_zero_vector_is_traced() {
    let logs = capture(|| {
        let unit = Vector3::<f64>::from_scalar(0.0).unit();
        assert!(unit.x().is_nan());
    });
    assert!(logs.contains("TRACE"), "{logs}");
    assert!(logs.contains("normalizing a zero-magnitude vector"), "{logs}");
    assert!(logs.contains("length=3"), "{logs}");
}

#[test]
fn matching_operands_log_nothing_at_debug() {
    let logs = capture(|| {
        let sum = Vector2::new(1.0f64, 2.0).add(&Vector2::new(3.0, 4.0)).unwrap();
        assert_eq!(sum, Vector2::new(4.0, 6.0));
    });
    assert!(!logs.contains("rejecting"), "{logs}");
}
