use smallvec::SmallVec;
use std::fmt;

/// An ordered, de-duplicated list of class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(SmallVec<[String; 4]>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace separated class in `classes`.
    pub fn with(mut self, classes: impl AsRef<str>) -> Self {
        self.push(classes);
        self
    }

    pub fn with_if(self, classes: impl AsRef<str>, condition: bool) -> Self {
        if condition {
            self.with(classes)
        } else {
            self
        }
    }

    pub fn push(&mut self, classes: impl AsRef<str>) {
        for class in classes.as_ref().split_whitespace() {
            if !self.contains(class) {
                self.0.push(class.to_owned());
            }
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (index, class) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            formatter.write_str(class)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for ClassList {
    fn from(classes: &'a str) -> Self {
        Self::new().with(classes)
    }
}
