//! Binding of routine arguments to constructor parameters.
//!
//! Routine lines carry arguments as text, either positionally (`Move, 0.5, 0.2`)
//! or by keyword (`Move, x=0.5, y=0.2, max_steps=10`). Positional arguments
//! fill parameters in declaration order; keywords fill them by name.
use pilot_core::ValidationError;

/// Raw arguments of one routine entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    positional: Vec<String>,
    keyword: Vec<(String, String)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits raw tokens into positional and `key=value` arguments.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut args = Self::new();
        for token in raw {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            match token.split_once('=') {
                Some((key, value)) => args = args.keyword(key, value),
                None => args = args.positional(token),
            }
        }
        args
    }

    #[must_use]
    pub fn positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    #[must_use]
    pub fn keyword(mut self, key: &str, value: &str) -> Self {
        self.keyword
            .push((key.trim().to_ascii_lowercase(), value.trim().to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Assigns arguments to `params`, in order.
    ///
    /// # Errors
    ///
    /// Fails if there are more positional arguments than parameters, if a
    /// keyword names no parameter, or if a parameter is given twice.
    pub fn bind<const N: usize>(
        &self,
        command: &'static str,
        params: [&'static str; N],
    ) -> Result<Bound<'_, N>, ValidationError> {
        if self.positional.len() > N {
            return Err(ValidationError::TooManyArguments {
                command,
                expected: N,
                found: self.positional.len() + self.keyword.len(),
            });
        }

        let mut values: [Option<&str>; N] = [None; N];
        for (slot, value) in values.iter_mut().zip(&self.positional) {
            *slot = Some(value.as_str());
        }

        for (key, value) in &self.keyword {
            let index = params
                .iter()
                .position(|param| param == key)
                .ok_or_else(|| ValidationError::UnexpectedArgument {
                    command,
                    argument: key.clone(),
                })?;
            if values[index].is_some() {
                return Err(ValidationError::UnexpectedArgument {
                    command,
                    argument: key.clone(),
                });
            }
            values[index] = Some(value.as_str());
        }

        Ok(Bound {
            command,
            params,
            values,
        })
    }
}

/// Arguments matched to parameter names.
#[derive(Debug)]
pub struct Bound<'a, const N: usize> {
    command: &'static str,
    params: [&'static str; N],
    values: [Option<&'a str>; N],
}

impl<'a, const N: usize> Bound<'a, N> {
    pub fn optional(&self, param: &str) -> Option<&'a str> {
        self.params
            .iter()
            .position(|p| *p == param)
            .and_then(|index| self.values[index])
    }

    pub fn required(&self, param: &'static str) -> Result<&'a str, ValidationError> {
        self.optional(param)
            .ok_or(ValidationError::MissingArgument {
                command: self.command,
                param,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_fill_in_order() {
        let args = Args::parse(&["0.5", "0.25"]);
        let bound = args.bind("Move", ["x", "y", "max_steps"]).unwrap();
        assert_eq!(bound.required("x"), Ok("0.5"));
        assert_eq!(bound.required("y"), Ok("0.25"));
        assert_eq!(bound.optional("max_steps"), None);
    }

    #[test]
    fn keywords_fill_by_name() {
        let args = Args::parse(&["x=0.5", " Max_Steps = 3 ", "y=0.25"]);
        let bound = args.bind("Move", ["x", "y", "max_steps"]).unwrap();
        assert_eq!(bound.required("x"), Ok("0.5"));
        assert_eq!(bound.optional("max_steps"), Some("3"));
    }

    #[test]
    fn missing_required_argument() {
        let args = Args::parse(&["0.5"]);
        let bound = args.bind("Move", ["x", "y", "max_steps"]).unwrap();
        assert_eq!(
            bound.required("y"),
            Err(ValidationError::MissingArgument {
                command: "Move",
                param: "y"
            })
        );
    }

    #[test]
    fn rejects_extra_and_unknown_arguments() {
        let args = Args::parse(&["left", "right"]);
        assert!(matches!(
            args.bind("Jump", ["direction"]),
            Err(ValidationError::TooManyArguments { expected: 1, .. })
        ));

        let args = Args::parse(&["speed=3"]);
        assert!(matches!(
            args.bind("Jump", ["direction"]),
            Err(ValidationError::UnexpectedArgument { .. })
        ));

        let args = Args::parse(&["left", "direction=right"]);
        assert!(matches!(
            args.bind("Jump", ["direction"]),
            Err(ValidationError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn parameterless_commands_accept_nothing() {
        assert!(Args::parse::<&str>(&[]).bind("Shout", []).is_ok());
        assert!(Args::parse(&["", "  "]).is_empty());
        assert!(Args::parse(&["1"]).bind("Shout", []).is_err());
    }
}
