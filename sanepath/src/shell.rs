//! Shell dialects and assignment-statement rendering.
//!
//! The emitted text is meant to be evaluated by the invoking shell
//! (`source <(sanepath ...)` or `eval "$(sanepath ...)"`), so each dialect
//! has its own exact assignment syntax.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

/// Supported shell dialects.
///
/// The dialect determines the syntax of the emitted `PATH` assignment.
/// Because this is a closed enum, the renderer cannot be reached with an
/// out-of-range dialect; invalid user input fails earlier, when parsing
/// the string form.
///
/// # Examples
///
/// ```
/// use sanepath::Shell;
///
/// let shell: Shell = "fish".parse().unwrap();
/// assert_eq!(shell, Shell::Fish);
/// assert!("csh".parse::<Shell>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
}

impl Shell {
    /// Render the assignment statement for this dialect.
    ///
    /// Joins `parts` with `:` and wraps the result in the dialect's
    /// variable-assignment syntax. Bash and zsh share `export PATH="..."`;
    /// fish uses `set -gx PATH "..."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanepath::Shell;
    ///
    /// let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    /// assert_eq!(Shell::Bash.eval_string(&parts), r#"export PATH="a:b:c""#);
    /// assert_eq!(Shell::Fish.eval_string(&parts), r#"set -gx PATH "a:b:c""#);
    /// ```
    #[must_use]
    pub fn eval_string(self, parts: &[String]) -> String {
        let path = parts.join(":");
        match self {
            Self::Bash | Self::Zsh => format!(r#"export PATH="{path}""#),
            Self::Fish => format!(r#"set -gx PATH "{path}""#),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Zsh => write!(f, "zsh"),
            Self::Fish => write!(f, "fish"),
        }
    }
}

impl FromStr for Shell {
    type Err = Error;

    /// Parses a shell dialect from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            _ => Err(Error::UnsupportedShell {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_from_str() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!("fish".parse::<Shell>().unwrap(), Shell::Fish);

        // Case insensitive
        assert_eq!("BASH".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("Fish".parse::<Shell>().unwrap(), Shell::Fish);

        // Unknown shells should error
        assert!("csh".parse::<Shell>().is_err());
        assert!("".parse::<Shell>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert_eq!(shell.to_string().parse::<Shell>().unwrap(), shell);
        }
    }

    #[test]
    fn test_eval_string_bash_and_zsh_share_syntax() {
        let p = parts(&["a", "b", "c"]);
        assert_eq!(Shell::Bash.eval_string(&p), r#"export PATH="a:b:c""#);
        assert_eq!(Shell::Zsh.eval_string(&p), r#"export PATH="a:b:c""#);
    }

    #[test]
    fn test_eval_string_fish() {
        let p = parts(&["a", "b", "c"]);
        assert_eq!(Shell::Fish.eval_string(&p), r#"set -gx PATH "a:b:c""#);
    }

    #[test]
    fn test_eval_string_empty_parts() {
        assert_eq!(Shell::Bash.eval_string(&[]), r#"export PATH="""#);
    }

    #[test]
    fn test_eval_string_single_part() {
        let p = parts(&["/usr/local/bin"]);
        assert_eq!(
            Shell::Zsh.eval_string(&p),
            r#"export PATH="/usr/local/bin""#
        );
    }
}
