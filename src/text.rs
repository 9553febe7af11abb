//! String checks

use crate::error::{Error, Result};

/// Is every `(` of `input` closed by a matching `)` coming after it. Any other
/// character is ignored, and an empty input is balanced
pub fn has_balanced_parentheses(input: Option<&str>) -> Result<bool> {
    let input = input.ok_or_else(|| Error::invalid_argument("input cannot be null"))?;

    let mut balance = 0usize;
    for (idx, c) in input.char_indices() {
        match c {
            '(' => balance += 1,
            ')' => match balance.checked_sub(1) {
                Some(new_balance) => balance = new_balance,
                None => {
                    log!(text, "unmatched closing parenthesis at byte {}", idx);
                    return Ok(false);
                }
            },
            _ => {}
        }
    }

    if balance != 0 {
        log!(text, "{} parentheses left open", balance);
    }

    Ok(balance == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_balanced() {
        assert_eq!(has_balanced_parentheses(Some("(()())")), Ok(true));
        assert_eq!(has_balanced_parentheses(Some("()")), Ok(true));
    }

    #[test]
    fn t_unbalanced() {
        assert_eq!(has_balanced_parentheses(Some("(()")), Ok(false));
        assert_eq!(has_balanced_parentheses(Some(")")), Ok(false));
        assert_eq!(has_balanced_parentheses(Some("())(")), Ok(false));
    }

    #[test]
    fn t_empty_is_balanced() {
        assert_eq!(has_balanced_parentheses(Some("")), Ok(true));
    }

    #[test]
    fn t_other_characters_ignored() {
        assert_eq!(has_balanced_parentheses(Some("f(x, g(y)) [z]")), Ok(true));
        assert_eq!(has_balanced_parentheses(Some("no parens at all")), Ok(true));
        assert_eq!(has_balanced_parentheses(Some("é(ü")), Ok(false));
    }

    #[test]
    fn t_no_input() {
        assert_eq!(
            has_balanced_parentheses(None).unwrap_err().msg(),
            Some("input cannot be null")
        );
    }
}
