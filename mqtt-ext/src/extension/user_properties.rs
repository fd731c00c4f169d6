use std::slice::Iter;

/// A single user property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProperty<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Read-only view of the user properties of a packet.
///
/// Properties keep the order in which they were received, and the same name
/// may appear any number of times.
#[derive(Debug, Clone, Copy)]
pub struct UserProperties<'a> {
    properties: &'a [(String, String)],
}

impl<'a> UserProperties<'a> {
    pub(crate) fn new(properties: &'a [(String, String)]) -> Self {
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn iter(&self) -> UserPropertiesIter<'a> {
        UserPropertiesIter {
            inner: self.properties.iter(),
        }
    }

    pub fn as_list(&self) -> Vec<UserProperty<'a>> {
        self.iter().collect()
    }

    /// Value of the first property called `name`
    pub fn get_first(&self, name: &str) -> Option<&'a str> {
        self.iter()
            .find(|property| property.name == name)
            .map(|property| property.value)
    }

    /// Values of every property called `name`, in order
    pub fn get_all_for_name(&self, name: &str) -> Vec<&'a str> {
        self.iter()
            .filter(|property| property.name == name)
            .map(|property| property.value)
            .collect()
    }
}

/// Iterator over [`UserProperties`]
#[derive(Debug, Clone)]
pub struct UserPropertiesIter<'a> {
    inner: Iter<'a, (String, String)>,
}

impl<'a> Iterator for UserPropertiesIter<'a> {
    type Item = UserProperty<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| UserProperty { name, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for UserPropertiesIter<'_> {}

impl<'a> IntoIterator for UserProperties<'a> {
    type Item = UserProperty<'a>;
    type IntoIter = UserPropertiesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn props() -> Vec<(String, String)> {
        vec![
            ("region".into(), "eu".into()),
            ("tag".into(), "a".into()),
            ("region".into(), "us".into()),
        ]
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let stored = props();
        let view = UserProperties::new(&stored);

        assert_eq!(view.len(), 3);
        assert_eq!(
            view.as_list(),
            vec![
                UserProperty {
                    name: "region",
                    value: "eu"
                },
                UserProperty {
                    name: "tag",
                    value: "a"
                },
                UserProperty {
                    name: "region",
                    value: "us"
                },
            ]
        );
    }

    #[test]
    fn lookup_by_name() {
        let stored = props();
        let view = UserProperties::new(&stored);

        assert_eq!(view.get_first("region"), Some("eu"));
        assert_eq!(view.get_all_for_name("region"), vec!["eu", "us"]);
        assert_eq!(view.get_first("missing"), None);
        assert!(view.get_all_for_name("missing").is_empty());
    }

    #[test]
    fn empty() {
        let view = UserProperties::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.into_iter().count(), 0);
    }
}
