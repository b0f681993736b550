// Query Builder - parameterized MATCH for the movie-rating graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{AppError, AppResult};

pub const DEFAULT_OPERATOR: ComparisonOperator = ComparisonOperator::Gt;
pub const DEFAULT_LIMIT: u32 = 100;

/// Comparison applied to `m.year`. Only these are ever written into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "<>")]
    Ne,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Ge => ">=",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Ne => "<>",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" => Ok(ComparisonOperator::Eq),
            ">" => Ok(ComparisonOperator::Gt),
            "<" => Ok(ComparisonOperator::Lt),
            ">=" => Ok(ComparisonOperator::Ge),
            "<=" => Ok(ComparisonOperator::Le),
            "<>" => Ok(ComparisonOperator::Ne),
            _ => Err(AppError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movie query parameters. Renders to the query text through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieQuery {
    year: Option<i64>,
    operator: ComparisonOperator,
    limit: u32,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            year: None,
            operator: DEFAULT_OPERATOR,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl MovieQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn operator(mut self, operator: ComparisonOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(&self) -> String {
        let query = self.to_string();
        debug!("Built movie query: {}", query);
        query
    }
}

impl fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MATCH (e)-[r]-(m:Movie)")?;
        if let Some(year) = self.year {
            write!(f, " WHERE m.year {} {}", self.operator, year)?;
        }
        write!(f, " RETURN e, r, m LIMIT {}", self.limit)
    }
}

/// Build the movie query from loosely typed parameters.
///
/// `operator` must be one of `=`, `>`, `<`, `>=`, `<=`, `<>`; anything else is
/// rejected with [`AppError::InvalidOperator`] instead of being spliced into the
/// query text. Without a `year` the filter clause is left out.
pub fn build_query(year: Option<i64>, operator: &str, limit: u32) -> AppResult<String> {
    let operator: ComparisonOperator = operator.parse()?;
    let mut query = MovieQuery::new().operator(operator).limit(limit);
    if let Some(year) = year {
        query = query.year(year);
    }
    Ok(query.build())
}
