use crate::core::resolver::{NamedResolver, NumericResolver};
use crate::core::tokenizer::{next_value, step_left, Delimiter};
use crate::domain::model::{FieldKind, ValueRange};
use crate::domain::ports::ValueResolver;
use crate::utils::error::{CronError, Result};

/// Expands field expressions such as `1,2,10-25/5` or `jan-mar` into the
/// sorted, de-duplicated values they denote within `range`.
///
/// The expression is evaluated right to left: a step (`/n`) is seen before the
/// range it applies to, which lets the range be read on demand.
#[derive(Debug, Clone)]
pub struct FieldParser<R: ValueResolver> {
    range: ValueRange,
    resolver: R,
}

impl<R: ValueResolver> FieldParser<R> {
    pub fn new(range: ValueRange, resolver: R) -> Self {
        Self { range, resolver }
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn parse(&self, expression: &str) -> Result<Vec<u32>> {
        tracing::debug!(
            "Expanding '{}' within {}-{}",
            expression,
            self.range.min,
            self.range.max
        );

        let range = self.range;
        let mut values = Vec::new();
        let (mut token, mut cursor) = next_value(expression, expression.len().checked_sub(1));

        while let Some(delimiter) = Delimiter::at(expression, cursor) {
            tracing::trace!("token '{}' left of {:?}", token, delimiter);

            match delimiter {
                Delimiter::Step => {
                    let (base, next) =
                        self.read_range(expression, step_left(expression, cursor))?;
                    let step = self.resolver.resolve(token)?;
                    if step == 0 {
                        return Err(CronError::invalid_argument(token));
                    }
                    values.extend(base.into_iter().step_by(step as usize));
                    cursor = next;
                }
                Delimiter::Comma => {
                    values.push(self.resolver.resolve(token)?);
                }
                Delimiter::Hyphen => {
                    let (low, next) = next_value(expression, step_left(expression, cursor));
                    let low = range.min.max(self.resolver.resolve(low)?);
                    let high = range.max.min(self.resolver.resolve(token)?);
                    values.extend(ValueRange::new(low, high).values());
                    cursor = next;
                }
                Delimiter::Wildcard => {
                    // '*' 左邊的內容一律忽略，不做解析
                    values.extend(range.values());
                    break;
                }
            }

            (token, cursor) = next_value(expression, step_left(expression, cursor));
        }

        if !token.is_empty() {
            values.push(self.resolver.resolve(token)?);
        }

        let mut values: Vec<u32> = values.into_iter().filter(|v| range.contains(*v)).collect();
        values.sort_unstable();
        values.dedup();

        tracing::debug!("'{}' expanded to {} values", expression, values.len());
        Ok(values)
    }

    /// Reads the base range of a step expression, starting just left of the `/`.
    ///
    /// Accepts `lo-hi`, a bare `hi` (only the upper bound is narrowed), `*`,
    /// or nothing. Bounds are clamped on a copy of the field
    /// range. Returns the ascending values and the cursor left of what was
    /// consumed.
    fn read_range(
        &self,
        expression: &str,
        pos: Option<usize>,
    ) -> Result<(Vec<u32>, Option<usize>)> {
        let mut range = self.range;

        let (high, mut cursor) = next_value(expression, pos);
        if !high.is_empty() {
            range.max = range.max.min(self.resolver.resolve(high)?);
        }

        match Delimiter::at(expression, cursor) {
            Some(Delimiter::Hyphen) => {
                let (low, next) = next_value(expression, step_left(expression, cursor));
                range.min = range.min.max(self.resolver.resolve(low)?);
                cursor = next;
            }
            Some(Delimiter::Wildcard) => cursor = step_left(expression, cursor),
            _ => {}
        }

        Ok((range.values(), cursor))
    }
}

impl FieldParser<NumericResolver> {
    pub fn numeric(range: ValueRange) -> Self {
        Self::new(range, NumericResolver)
    }
}

impl FieldParser<NamedResolver> {
    pub fn months() -> Self {
        Self::new(FieldKind::Month.range(), NamedResolver::months())
    }

    pub fn weekdays() -> Self {
        Self::new(FieldKind::DayOfWeek.range(), NamedResolver::weekdays())
    }
}

impl FieldParser<Box<dyn ValueResolver>> {
    /// Parser with the range and name table of `kind`.
    pub fn for_kind(kind: FieldKind) -> Self {
        let resolver: Box<dyn ValueResolver> = match kind {
            FieldKind::Minute | FieldKind::Hour | FieldKind::DayOfMonth => {
                Box::new(NumericResolver)
            }
            FieldKind::Month => Box::new(NamedResolver::months()),
            FieldKind::DayOfWeek => Box::new(NamedResolver::weekdays()),
        };
        Self::new(kind.range(), resolver)
    }
}
