use std::{
    fmt::Display,
    ops::{
        Add,
        Div,
        Mul,
    },
};

/// A value paired with a trail describing each arithmetic step applied to it.
///
/// The trail reads like `["=300 - attack", "x42 - level", "\u{00F7}50 - constant"]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Output<T> {
    value: T,
    description: Vec<String>,
}

impl<T> Output<T>
where
    T: Default,
{
    /// Starts the output with a value and the reason it was chosen.
    pub fn start<V, S>(val: V, reason: S) -> Self
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        let mut s = Self::default();
        s.set(val, reason);
        s
    }

    /// The current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Description of all changes.
    pub fn description(&self) -> &[String] {
        self.description.as_slice()
    }

    /// Consumes the output, returning the value and its description.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.description)
    }

    pub fn add<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Add<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.add(rhs.clone());
        self.description.push(format!("+{rhs} - {reason}"));
    }

    pub fn mul<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Mul<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.mul(rhs.clone());
        self.description.push(format!("x{rhs} - {reason}"));
    }

    pub fn div<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display,
        S: Display,
        T: Div<V, Output = T>,
    {
        let val = std::mem::take(&mut self.value);
        self.value = val.div(rhs.clone());
        self.description.push(format!("\u{00F7}{rhs} - {reason}"));
    }

    /// Sets the value.
    pub fn set<V, S>(&mut self, rhs: V, reason: S)
    where
        V: Clone + Display + Into<T>,
        S: Display,
    {
        self.value = rhs.clone().into();
        self.description.push(format!("={rhs} - {reason}"));
    }

    /// Maps to a value of another type.
    pub fn map<F, M, S>(mut self, f: F, reason: S) -> Output<M>
    where
        F: FnOnce(T) -> M,
        S: Display,
    {
        let value = f(self.value);
        self.description.push(format!("[mapped] - {reason}"));
        Output {
            value,
            description: self.description,
        }
    }
}

impl<T> From<T> for Output<T> {
    fn from(value: T) -> Self {
        Self {
            value,
            description: Vec::default(),
        }
    }
}

#[cfg(test)]
mod output_test {
    use crate::common::Output;

    #[test]
    fn records_each_integer_step() {
        let mut output = Output::<u32>::start(300u32, "attack");
        output.mul(42u32, "level");
        output.mul(80u32, "power");
        output.div(200u32, "defense");
        output.div(50u32, "constant");
        output.add(2u32, "constant");

        assert_eq!(output.value(), &102);
        assert_eq!(
            output.description().join(";"),
            "=300 - attack;x42 - level;x80 - power;\u{00F7}200 - defense;\u{00F7}50 - constant;+2 - constant"
        );
    }

    #[test]
    fn maps_to_float_and_keeps_trail() {
        let mut output = Output::<u32>::start(102u32, "base");
        output.add(0u32, "nothing");
        let mut output = output.map(f64::from, "float");
        output.mul(1.5, "stab");

        let (value, description) = output.into_parts();
        assert_eq!(value, 153.0);
        assert_eq!(
            description,
            Vec::from([
                "=102 - base".to_owned(),
                "+0 - nothing".to_owned(),
                "[mapped] - float".to_owned(),
                "x1.5 - stab".to_owned(),
            ])
        );
    }

    #[test]
    fn untracked_value_has_empty_trail() {
        let output = Output::from(7u32);
        assert_eq!(output.value(), &7);
        assert!(output.description().is_empty());
    }
}
