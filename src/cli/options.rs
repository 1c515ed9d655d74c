use std::collections::HashMap;

/// Value of a command line option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The token following the option
    Value(String),
    /// The option was the last token, or followed by an empty one
    Flag,
}

/// Flat map of command line options
///
/// Every token starting with `-` names an option. A leading `--`, or else a single
/// `-`, is stripped from the name and the next token, whatever it is, becomes the
/// value. Repeated options keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(HashMap<String, OptionValue>);

impl Options {
    /// Scans arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Options
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut options = HashMap::new();
        for (i, arg) in args.iter().enumerate() {
            let arg = arg.as_ref();
            if !arg.starts_with('-') {
                continue;
            }
            let name = if arg.starts_with("--") {
                &arg[2..]
            } else {
                &arg[1..]
            };
            let value = match args.get(i + 1).map(|s| s.as_ref()) {
                Some(next) if !next.is_empty() => OptionValue::Value(next.to_string()),
                _ => OptionValue::Flag,
            };
            options.insert(name.to_string(), value);
        }
        Options(options)
    }

    /// Looks up an option
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    /// Whether an option was given, with or without a value
    pub fn is_set(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// String value of the first of `names` that is present
    ///
    /// A flag without a value reads as absent.
    pub fn value(&self, names: &[&str]) -> Option<&str> {
        match names.iter().filter_map(|name| self.get(name)).next() {
            Some(OptionValue::Value(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}
