use crate::*;
use moka::sync::Cache;

/// Turns backend responses into displayable replies.
///
/// Constructed once at startup and owned by the chat controller. Rendering is
/// pure, so identical queries are served from a bounded cache.
pub struct Renderer {
    dialect: Dialect,
    markup: Markup,
    options: FormatOptions,
    cache: Cache<String, SqlBlock>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(
            Dialect::default(),
            Markup::default(),
            FormatOptions::default(),
            Self::DEFAULT_CAPACITY,
        )
    }
}

impl Renderer {
    pub const DEFAULT_CAPACITY: u64 = 256;

    pub fn new(dialect: Dialect, markup: Markup, options: FormatOptions, capacity: u64) -> Self {
        Self {
            dialect,
            markup,
            options,
            cache: Cache::new(capacity),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Dialect::default(),
            Markup::new(config.class_prefix.as_str()),
            FormatOptions {
                indent: config.indent,
            },
            config.cache_capacity,
        )
    }

    /// Render a query. Absent input skips rendering entirely.
    pub fn block(&self, raw: Option<&str>) -> Option<SqlBlock> {
        let raw = raw?;
        Some(self.cache.get_with_by_ref(raw, || {
            debug!("Rendering {} byte query", raw.len());
            SqlBlock::build(raw, &self.options, &self.dialect, &self.markup)
        }))
    }

    /// Classify a backend response the way the chat view presents it.
    ///
    /// An empty `sql_query` counts as absent.
    pub fn reply(&self, response: QueryResponse) -> Reply {
        let sql = self.block(response.sql_query.as_deref().filter(|q| !q.is_empty()));
        if response.success {
            Reply::Answer {
                sql,
                rows: response.results,
                execution_time: response.execution_time,
            }
        } else {
            let error = response.error.as_deref().unwrap_or("Unknown error");
            warn!("Backend reported failure: {error}");
            Reply::Failure {
                message: format!("Error: {error}"),
                sql,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    fn absent_query_skips_rendering(renderer: Renderer) {
        assert_eq!(renderer.block(None), None);
    }

    #[rstest]
    fn blocks_match_the_pipeline(renderer: Renderer) {
        for &raw in SAMPLE_QUERIES {
            let block = renderer.block(Some(raw)).unwrap();
            assert_eq!(block.raw, raw);
            assert_eq!(block.markup, highlight(&format(raw)));
        }
    }

    #[rstest]
    fn repeated_queries_are_cached(renderer: Renderer) {
        let first = renderer.block(Some("SELECT 1")).unwrap();
        let second = renderer.block(Some("SELECT 1")).unwrap();
        assert_eq!(first, second);
        renderer.cache.run_pending_tasks();
        assert_eq!(renderer.cache.entry_count(), 1);
    }

    #[test]
    fn configured_renderer() {
        let config = Config {
            indent: 4,
            class_prefix: "q-".into(),
            cache_capacity: 8,
        };
        let block = Renderer::from_config(&config)
            .block(Some("SELECT a, b FROM t"))
            .unwrap();
        assert_eq!(block.formatted, "SELECT a,\n    b\nFROM t");
        assert!(block.markup.starts_with("<span class=\"q-keyword\">SELECT</span>"));
    }

    #[rstest]
    fn success_reply(renderer: Renderer) {
        let response = QueryResponse::from_json(
            r#"{"success": true, "sql_query": "select 1", "results": [], "execution_time": 0.5}"#,
        )
        .unwrap();
        match renderer.reply(response) {
            Reply::Answer {
                sql,
                rows,
                execution_time,
            } => {
                assert_eq!(
                    sql.unwrap().markup,
                    "<span class=\"sql-keyword\">SELECT</span> <span class=\"sql-number\">1</span>"
                );
                assert_eq!(rows, Some(vec![]));
                assert_eq!(execution_time, Some(0.5));
            }
            other => panic!("expected answer, got {other:?}"),
        }
    }

    #[rstest]
    #[case(
        r#"{"success": false, "error": "column x does not exist", "sql_query": "SELECT x FROM t"}"#,
        "Error: column x does not exist",
        true
    )]
    #[case(
        r#"{"success": false, "error": "rate limited", "sql_query": ""}"#,
        "Error: rate limited",
        false
    )]
    #[case(r#"{"success": false}"#, "Error: Unknown error", false)]
    fn failure_reply(#[case] body: &str, #[case] message: &str, #[case] has_sql: bool) {
        let reply = Renderer::default().reply(QueryResponse::from_json(body).unwrap());
        assert!(matches!(reply, Reply::Failure { .. }));
        assert_eq!(reply.message(), message);
        assert_eq!(reply.sql().is_some(), has_sql);
    }

    #[test]
    fn reply_serializes_with_kind_tag() {
        let reply = Renderer::default().reply(QueryResponse {
            success: false,
            error: Some("bad".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "failure");
        assert_eq!(json["message"], "Error: bad");
        assert!(json["sql"].is_null());
    }
}
