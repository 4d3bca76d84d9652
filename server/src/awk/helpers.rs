//! Helpers available to command templates.

use rand::Rng;

use super::error::RenderError;
use super::words::{PLURAL_ADJECTIVES, SINGULAR_ADJECTIVES};

/// Uniform integer in `[min, max)`.
///
/// Reversed bounds are swapped. An empty range yields `min`.
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if min == max {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniformly pick one element, or `""` for an empty list.
pub fn pick_one<'a, R, S>(rng: &mut R, items: &'a [S]) -> &'a str
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    match items {
        [] => "",
        [only] => only.as_ref(),
        _ => items[rand_between(rng, 0, items.len() as i64) as usize].as_ref(),
    }
}

/// Adjective list that agrees with a count of `n`.
pub fn adjectives(n: i64) -> &'static [&'static str] {
    if n <= 1 {
        &SINGULAR_ADJECTIVES
    } else {
        &PLURAL_ADJECTIVES
    }
}

/// Join items into an English list: `a, b, or c`.
///
/// The conjunction is trimmed. When it is empty the items are joined with
/// commas only.
pub fn enumerate<S: AsRef<str>>(conjunction: &str, items: &[S]) -> String {
    let conjunction = conjunction.trim();
    let conjunction = if conjunction.is_empty() {
        String::new()
    } else {
        format!("{conjunction} ")
    };

    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => {
            let sep = if conjunction.is_empty() {
                ", ".to_string()
            } else {
                format!(" {conjunction}")
            };
            format!("{}{sep}{}", first.as_ref(), second.as_ref())
        }
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{}, {conjunction}{}", head.join(", "), last.as_ref())
        }
    }
}

/// Sub-slice `items[from..to]`, where negative indices count from the end.
pub fn slice_range<S>(from: i64, to: i64, items: &[S]) -> Result<&[S], RenderError> {
    let len = items.len() as i64;
    let from = if from < 0 { len + from } else { from };
    let to = if to < 0 { len + to } else { to };

    if to < 0 || to > len {
        return Err(RenderError::SliceToOutOfRange);
    }
    if from < 0 || from > len {
        return Err(RenderError::SliceFromOutOfRange);
    }
    if to < from {
        return Err(RenderError::SliceToBeforeFrom);
    }

    Ok(&items[from as usize..to as usize])
}
