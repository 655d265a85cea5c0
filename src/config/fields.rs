//! Path-tracking access into a parsed YAML tree.
//!
//! Every lookup remembers where it is (`professional_experience.jobs[1].role`)
//! so a missing or mistyped key is reported with its full field path.

use serde_yaml::Value;

use crate::error::{ResumeError, Result};

/// A YAML value together with its dotted path from the document root
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    /// Wrap the document root; it must be a mapping (or empty)
    pub fn root(value: &'a Value) -> Result<Self> {
        let node = Self {
            value,
            path: String::new(),
        };
        node.expect_mapping()?;
        Ok(node)
    }

    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }

    fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn expect_mapping(&self) -> Result<()> {
        match self.value {
            Value::Mapping(_) | Value::Null => Ok(()),
            _ => Err(ResumeError::InvalidField {
                path: self.path().to_string(),
                expected: "a mapping",
            }),
        }
    }

    /// Look up a key; absent and explicit `null` are both `None`
    pub fn get(&self, key: &str) -> Result<Option<Node<'a>>> {
        self.expect_mapping()?;
        Ok(match self.value.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(Node {
                value,
                path: self.key_path(key),
            }),
        })
    }

    /// Required nested mapping
    pub fn child(&self, key: &str) -> Result<Node<'a>> {
        let node = self
            .get(key)?
            .ok_or_else(|| ResumeError::missing(self.key_path(key)))?;
        node.expect_mapping()?;
        Ok(node)
    }

    /// Optional nested mapping
    pub fn opt_child(&self, key: &str) -> Result<Option<Node<'a>>> {
        match self.get(key)? {
            Some(node) => {
                node.expect_mapping()?;
                Ok(Some(node))
            }
            None => Ok(None),
        }
    }

    /// This node as display text. Numbers and booleans keep their YAML spelling.
    pub fn text(&self) -> Result<String> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Err(ResumeError::missing(self.path())),
            _ => Err(ResumeError::InvalidField {
                path: self.path().to_string(),
                expected: "text",
            }),
        }
    }

    /// Required text field
    pub fn str(&self, key: &str) -> Result<String> {
        self.get(key)?
            .ok_or_else(|| ResumeError::missing(self.key_path(key)))?
            .text()
    }

    /// Optional text field
    pub fn opt_str(&self, key: &str) -> Result<Option<String>> {
        self.get(key)?.map(|node| node.text()).transpose()
    }

    fn items(&self) -> Result<Vec<Node<'a>>> {
        match self.value {
            Value::Sequence(seq) => Ok(seq
                .iter()
                .enumerate()
                .map(|(i, value)| Node {
                    value,
                    path: format!("{}[{}]", self.path, i),
                })
                .collect()),
            _ => Err(ResumeError::InvalidField {
                path: self.path().to_string(),
                expected: "a list",
            }),
        }
    }

    /// Required sequence
    pub fn seq(&self, key: &str) -> Result<Vec<Node<'a>>> {
        self.get(key)?
            .ok_or_else(|| ResumeError::missing(self.key_path(key)))?
            .items()
    }

    /// Optional sequence; absent yields an empty list
    pub fn opt_seq(&self, key: &str) -> Result<Vec<Node<'a>>> {
        match self.get(key)? {
            Some(node) => node.items(),
            None => Ok(Vec::new()),
        }
    }

    /// Required list of text entries
    pub fn strings(&self, key: &str) -> Result<Vec<String>> {
        self.seq(key)?.iter().map(Node::text).collect()
    }

    /// Optional list of text entries
    pub fn opt_strings(&self, key: &str) -> Result<Vec<String>> {
        self.opt_seq(key)?.iter().map(Node::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_missing_key_reports_full_path() {
        let value = parse("outer:\n  inner:\n    present: yes\n");
        let root = Node::root(&value).unwrap();
        let inner = root.child("outer").unwrap().child("inner").unwrap();
        match inner.str("absent") {
            Err(ResumeError::MissingField { path }) => assert_eq!(path, "outer.inner.absent"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_sequence_paths_are_indexed() {
        let value = parse("jobs:\n  - company: A\n  - role: B\n");
        let root = Node::root(&value).unwrap();
        let jobs = root.seq("jobs").unwrap();
        assert_eq!(jobs[0].str("company").unwrap(), "A");
        match jobs[1].str("company") {
            Err(ResumeError::MissingField { path }) => assert_eq!(path, "jobs[1].company"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_scalars_render_as_text() {
        let value = parse("phone: 5551234\nactive: true\nnothing: ~\n");
        let root = Node::root(&value).unwrap();
        assert_eq!(root.str("phone").unwrap(), "5551234");
        assert_eq!(root.str("active").unwrap(), "true");
        assert!(matches!(
            root.str("nothing"),
            Err(ResumeError::MissingField { .. })
        ));
        assert_eq!(root.opt_str("nothing").unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_invalid_field() {
        let value = parse("title:\n  nested: x\nitems: not-a-list\n");
        let root = Node::root(&value).unwrap();
        assert!(matches!(
            root.str("title"),
            Err(ResumeError::InvalidField { expected: "text", .. })
        ));
        assert!(matches!(
            root.strings("items"),
            Err(ResumeError::InvalidField { expected: "a list", .. })
        ));
    }

    #[test]
    fn test_root_must_be_mapping() {
        let value = parse("- just\n- a list\n");
        assert!(Node::root(&value).is_err());
        assert!(Node::root(&Value::Null).is_ok());
    }

    #[test]
    fn test_optional_sequence_defaults_empty() {
        let value = parse("a: 1\n");
        let root = Node::root(&value).unwrap();
        assert!(root.opt_strings("highlights").unwrap().is_empty());
    }
}
