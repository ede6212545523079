use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::label::{Label, SentimentName, UnknownSentiment};

/// User-chosen subset of sentiment categories.
///
/// An empty selection applies no filter, so it behaves exactly like selecting
/// all four categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    names: BTreeSet<SentimentName>,
}

impl Selection {
    /// Selection with no categories (no filter).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selection with every category, the control's default state.
    pub fn all() -> Self {
        SentimentName::ALL.into_iter().collect()
    }

    /// Parse names or codes, accepting comma-separated entries.
    pub fn parse<I, S>(values: I) -> Result<Self, UnknownSentiment>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = BTreeSet::new();
        for value in values {
            for part in value.as_ref().split(',') {
                if part.trim().is_empty() {
                    continue;
                }
                names.insert(part.parse()?);
            }
        }
        Ok(Self { names })
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether records carrying `label` pass this selection.
    pub fn admits(&self, label: Label) -> bool {
        self.is_empty() || self.names.contains(&label.sentiment())
    }

    /// Selected names in control order.
    pub fn names(&self) -> impl Iterator<Item = SentimentName> + '_ {
        self.names.iter().copied()
    }
}

impl FromIterator<SentimentName> for Selection {
    fn from_iter<T: IntoIterator<Item = SentimentName>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_admits_every_label() {
        let selection = Selection::empty();
        assert!(Label::ALL.into_iter().all(|label| selection.admits(label)));
        assert!(selection.is_empty());
        assert_eq!(selection.names().count(), 0);
    }

    #[test]
    fn explicit_selection_admits_only_mapped_labels() {
        let selection: Selection = [SentimentName::Positivo, SentimentName::Pregunta]
            .into_iter()
            .collect();
        assert!(selection.admits(Label::Pos));
        assert!(selection.admits(Label::Q));
        assert!(!selection.admits(Label::Neg));
        assert!(!selection.admits(Label::Neu));
        let admitted: Vec<Label> = Label::ALL
            .into_iter()
            .filter(|label| selection.admits(*label))
            .collect();
        assert_eq!(admitted, vec![Label::Pos, Label::Q]);
    }

    #[test]
    fn parse_splits_commas_and_dedups() {
        let selection = Selection::parse(["Positivo,neg", "positivo", " , "]).unwrap();
        assert_eq!(
            selection.names().collect::<Vec<_>>(),
            vec![SentimentName::Positivo, SentimentName::Negativo]
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = Selection::parse(["Neutral", "Enojado"]).unwrap_err();
        assert_eq!(err, UnknownSentiment("Enojado".to_string()));
    }

    #[test]
    fn all_lists_names_in_control_order() {
        assert_eq!(Selection::all().names().collect::<Vec<_>>(), SentimentName::ALL.to_vec());
    }
}
