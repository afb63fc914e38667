use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Family,
    Friends,
    Colleagues,
    Business,
    #[default]
    #[serde(other)]
    Other,
}

impl Group {
    /// Drop-down order in the form.
    pub const ALL: [Group; 5] = [
        Group::Family,
        Group::Friends,
        Group::Colleagues,
        Group::Business,
        Group::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Group::Family => "Family",
            Group::Friends => "Friends",
            Group::Colleagues => "Colleagues",
            Group::Business => "Business",
            Group::Other => "Other",
        }
    }

    pub fn index(self) -> u32 {
        Self::ALL.iter().position(|g| *g == self).unwrap_or(Self::ALL.len() - 1) as u32
    }

    pub fn from_index(index: u32) -> Self {
        Self::ALL.get(index as usize).copied().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: Group,
}

fn null_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Group, D::Error> {
    Ok(Option::<Group>::deserialize(deserializer)?.unwrap_or_default())
}

impl Contact {
    /// Case-insensitive substring match over the searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [
            Some(self.name.as_str()),
            Some(self.phone.as_str()),
            self.email.as_deref(),
            self.company.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Body of a create or update request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub group: Group,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_defaults_missing_optional_fields() {
        let c: Contact =
            serde_json::from_str(r#"{"id": 3, "name": "Ada", "phone": "555"}"#).unwrap();
        assert_eq!(c.email, None);
        assert_eq!(c.company, None);
        assert_eq!(c.group, Group::Other);
    }

    #[test]
    fn unknown_group_decodes_as_other() {
        let c: Contact = serde_json::from_str(
            r#"{"id": 1, "name": "A", "phone": "1", "group": "neighbours"}"#,
        )
        .unwrap();
        assert_eq!(c.group, Group::Other);
    }

    #[test]
    fn null_group_decodes_as_other() {
        let list: Vec<Contact> = serde_json::from_str(
            r#"[{"id":1,"name":"A","phone":"1","email":null,"company":null,"group":null}]"#,
        )
        .unwrap();
        assert_eq!(list[0].group, Group::Other);
        assert_eq!(list[0].email, None);
    }

    #[test]
    fn draft_serializes_all_keys() {
        let draft = ContactDraft {
            name: "Ada".into(),
            phone: "555".into(),
            email: None,
            company: Some("Analytical".into()),
            group: Group::Colleagues,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "phone": "555",
                "email": null,
                "company": "Analytical",
                "group": "colleagues",
            })
        );
    }

    #[test]
    fn group_index_round_trips_through_dropdown_positions() {
        for g in Group::ALL {
            assert_eq!(Group::from_index(g.index()), g);
        }
        assert_eq!(Group::from_index(42), Group::Other);
    }

    #[test]
    fn matches_checks_every_searchable_field() {
        let c = Contact {
            id: 1,
            name: "Jane Doe".into(),
            phone: "+1 555 0100".into(),
            email: Some("JSMITH@example.com".into()),
            company: Some("Acme".into()),
            group: Group::Business,
        };
        assert!(c.matches("smith"));
        assert!(c.matches("acme"));
        assert!(c.matches("555"));
        assert!(c.matches("jane"));
        assert!(!c.matches("zed"));
    }
}
