//! ORDER BY emission with per-term null placement.
//!
//! Terms are written in the order they appear in the [`SortSpec`]. A term with an
//! explicit [`NullPlacement`] gets the native `NULLS FIRST` / `NULLS LAST` clause when
//! the dialect has one; otherwise, if the dialect asks for
//! [`EmulationStrategy::CaseExpressionWrap`](nullsort_types::EmulationStrategy), it is
//! preceded by a `CASE WHEN (<expr>) IS NULL THEN 1 ELSE 0 END` key that pushes nulls
//! to the requested end.

use core::fmt::Write;

use nullsort_types::{DialectDescriptor, NullPlacement, SortDirection, SortSpec, SortTerm};

use crate::error::{Result, SortError};

const SEPARATOR: &str = ", ";

/// Builds `ORDER BY` fragments from a [`SortSpec`] and a [`DialectDescriptor`].
///
/// Stateless; every method is a pure function of its arguments.
///
/// # Examples
///
/// ```
/// use nullsort_core::NullOrderingFormatter;
/// use nullsort_types::{DialectDescriptor, SortSpec, SortTerm};
///
/// let spec = SortSpec::from([
///     SortTerm::asc("p.firstname"),
///     SortTerm::desc("p.lastname").nulls_last(),
/// ]);
///
/// let sql = NullOrderingFormatter::format(&spec, &DialectDescriptor::NATIVE).unwrap();
/// assert_eq!(sql, "p.firstname ASC, p.lastname DESC NULLS LAST");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOrderingFormatter;

impl NullOrderingFormatter {
    /// Comma-joined term list, or `""` for an empty spec.
    ///
    /// Fails with [`SortError::InvalidArgument`] if any term has an empty expression.
    pub fn format(spec: &SortSpec, dialect: &DialectDescriptor) -> Result<String> {
        let mut sql = String::new();
        Self::write_order_by(&mut sql, spec, dialect)?;
        crate::nullsort_trace_order_by!(&sql, spec.len(), dialect.emulates_nulls());
        Ok(sql)
    }

    /// `ORDER BY <terms>`, or `""` for an empty spec.
    pub fn order_by_clause(spec: &SortSpec, dialect: &DialectDescriptor) -> Result<String> {
        if spec.is_empty() {
            return Ok(String::new());
        }
        let mut sql = String::from("ORDER BY ");
        Self::write_order_by(&mut sql, spec, dialect)?;
        crate::nullsort_trace_order_by!(&sql, spec.len(), dialect.emulates_nulls());
        Ok(sql)
    }

    /// Fragment for a single term.
    pub fn format_term(term: &SortTerm, dialect: &DialectDescriptor) -> Result<String> {
        validate(0, term)?;
        let mut sql = String::new();
        write_term(&mut sql, term, dialect)?;
        crate::nullsort_trace_order_by!(&sql, 1usize, dialect.emulates_nulls());
        Ok(sql)
    }

    /// Streams the term list into `out`.
    ///
    /// All terms are validated before anything is written, so a rejected spec
    /// leaves `out` untouched. Rejected terms are traced, but the
    /// `nullsort.order_by` event is only emitted by the methods that return the
    /// finished `String`, since `out` may already hold unrelated text.
    pub fn write_order_by<W: Write>(
        out: &mut W,
        spec: &SortSpec,
        dialect: &DialectDescriptor,
    ) -> Result<()> {
        for (index, term) in spec.iter().enumerate() {
            validate(index, term)?;
        }

        for (index, term) in spec.iter().enumerate() {
            if index > 0 {
                out.write_str(SEPARATOR)?;
            }
            write_term(out, term, dialect)?;
        }
        Ok(())
    }
}

fn validate(index: usize, term: &SortTerm) -> Result<()> {
    if term.expression.trim().is_empty() {
        crate::nullsort_trace_invalid!(index, "empty expression");
        return Err(SortError::InvalidArgument(format!(
            "sort term {index} has an empty expression"
        )));
    }
    Ok(())
}

fn write_term<W: Write>(
    out: &mut W,
    term: &SortTerm,
    dialect: &DialectDescriptor,
) -> core::fmt::Result {
    let expr = term.expression.as_ref();
    let direction = term.direction.as_str();

    match term.nulls.clause() {
        None => write!(out, "{expr} {direction}"),
        Some(_) if dialect.emulates_nulls() => {
            // parenthesized: IS NULL binds tighter than NOT, AND, OR, BETWEEN
            let key = null_key_direction(term.nulls).as_str();
            write!(
                out,
                "CASE WHEN ({expr}) IS NULL THEN 1 ELSE 0 END {key}, {expr} {direction}"
            )
        }
        Some(clause) => write!(out, "{expr} {direction} {clause}"),
    }
}

/// Direction of the `IS NULL` key: nulls map to 1, so DESC puts them first.
fn null_key_direction(nulls: NullPlacement) -> SortDirection {
    match nulls {
        NullPlacement::First => SortDirection::Desc,
        NullPlacement::Last | NullPlacement::Default => SortDirection::Asc,
    }
}

/// Formatting methods on the value types themselves
pub trait FormatExt {
    /// Renders this value as an ORDER BY fragment for `dialect`.
    fn to_order_by(&self, dialect: &DialectDescriptor) -> Result<String>;
}

impl FormatExt for SortSpec {
    #[inline]
    fn to_order_by(&self, dialect: &DialectDescriptor) -> Result<String> {
        NullOrderingFormatter::format(self, dialect)
    }
}

impl FormatExt for SortTerm {
    #[inline]
    fn to_order_by(&self, dialect: &DialectDescriptor) -> Result<String> {
        NullOrderingFormatter::format_term(self, dialect)
    }
}
