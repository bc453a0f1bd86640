#![cfg(test)]
use crate::*;
pub use rstest::{fixture, rstest};

/// Queries shaped like what the backend echoes, plus a few broken ones.
pub const SAMPLE_QUERIES: &[&str] = &[
    "SELECT * FROM customers WHERE city = 'New York'",
    "select avg(total) as avg_order from orders",
    "SELECT o.id, c.name, o.total FROM orders o LEFT JOIN customers c ON c.id = o.customer_id \
     ORDER BY o.total DESC LIMIT 10",
    "SELECT category, COUNT(*) FROM products GROUP BY category HAVING COUNT(*) >= 5",
    "WITH recent AS (SELECT * FROM orders WHERE created_at > NOW() - 7) \
     SELECT COUNT(*) FROM recent",
    "SELECT id, -- primary key\n name /* display */ FROM users",
    "SELECT name FROM users WHERE note = 'it''s <b>bold</b> & more'",
    "SELECT 'unterminated FROM t",
    "))) ((( , , ,",
    "",
];

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

#[fixture]
pub fn renderer() -> Renderer {
    common_init();
    Renderer::default()
}

mod pipeline_properties {
    use super::*;

    #[rstest]
    fn pipeline_is_total(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9)] index: usize) {
        common_init();
        let raw = SAMPLE_QUERIES[index];
        let formatted = format(raw);
        let _ = highlight(&formatted);
        let _ = highlight(raw);
    }

    #[test]
    fn formatting_only_moves_whitespace() {
        let squash = |s: &str| s.split_whitespace().collect::<String>();
        for raw in SAMPLE_QUERIES {
            assert_eq!(squash(&format(raw)), squash(raw), "{raw}");
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in SAMPLE_QUERIES {
            let once = format(raw);
            assert_eq!(format(&once), once, "{raw}");
        }
    }

    #[test]
    fn markup_never_contains_live_input_tags() {
        for raw in SAMPLE_QUERIES {
            let out = highlight(raw);
            assert!(!out.contains("<b>"), "{out}");
            assert_eq!(out.matches("<span").count(), out.matches("</span>").count());
        }
    }
}
