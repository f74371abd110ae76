//! Error catalog support (`ErrDef` static definitions)

use crate::problem::Problem;
use http::StatusCode;

/// Static error definition from catalog
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    pub type_url: &'static str,
}

impl ErrDef {
    /// Convert this error definition into a Problem with the given detail
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        // Invalid codes in a catalog entry degrade to 500 rather than panic
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Problem::new(status, self.title, detail.into())
            .with_code(self.code)
            .with_type(self.type_url)
    }

    /// Same as [`ErrDef::as_problem`], attaching the request path and trace id.
    pub fn with_context(
        &self,
        detail: impl Into<String>,
        instance: &str,
        trace_id: Option<String>,
    ) -> Problem {
        crate::finalize(self.as_problem(detail), instance, trace_id)
    }
}
