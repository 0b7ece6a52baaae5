use crate::core::dimensions::{Dimension, DIMENSION_COUNT, NEUTRAL_VALUE};
use crate::core::scoring::round_to_hundredths;
use crate::models::{AnswerOption, Contribution, Persona};

/// Reduce answer contributions into one complete persona
///
/// Each canonical dimension becomes the mean of the values contributed to
/// it, rounded to two decimals; dimensions nobody contributed to stay at
/// 0.5. Unknown dimension names and non-finite values are skipped, so the
/// function is total over any input.
pub fn aggregate<'a, I>(contributions: I) -> Persona
where
    I: IntoIterator<Item = &'a Contribution>,
{
    let mut sums = [0.0_f64; DIMENSION_COUNT];
    let mut counts = [0_u32; DIMENSION_COUNT];

    for contribution in contributions {
        let dim = match contribution.dimension.parse::<Dimension>() {
            Ok(dim) => dim,
            Err(_) => {
                tracing::debug!("Ignoring contribution to unknown dimension {}", contribution.dimension);
                continue;
            }
        };

        if !contribution.value.is_finite() {
            tracing::warn!(
                "Ignoring non-finite contribution {} to {}",
                contribution.value,
                dim
            );
            continue;
        }

        sums[dim.index()] += contribution.value;
        counts[dim.index()] += 1;
    }

    Dimension::ALL
        .iter()
        .map(|dim| {
            let i = dim.index();
            let value = if counts[i] == 0 {
                NEUTRAL_VALUE
            } else {
                round_to_hundredths(sums[i] / counts[i] as f64).clamp(0.0, 1.0)
            };
            (*dim, value)
        })
        .collect()
}

/// Aggregate the options a student picked, one per answered question
pub fn aggregate_answers(answers: &[AnswerOption]) -> Persona {
    let contributions: Vec<Contribution> = answers
        .iter()
        .flat_map(|answer| answer.contributions())
        .collect();

    aggregate(&contributions)
}
