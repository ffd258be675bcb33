//! Plan feature summaries shown on plan cards

use serde::{Deserialize, Serialize};

use crate::models::{FeatureAvailability, SubscriptionPlanWithPricingSystems};

/// A feature row reduced to what a plan card displays.
///
/// Flags that were not set on the plan feature are left out of the output
/// entirely rather than written as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizedPlanFeature {
    pub displayed_feature_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<FeatureAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_like: Option<bool>,
}

/// Features of `plan` flagged for the summary, localized for `locale`.
///
/// Features with no entry in the plan's feature names are skipped. An entry
/// with no translation at all gives an empty display name.
pub fn summarize_plan_features(
    plan: &SubscriptionPlanWithPricingSystems,
    locale: &str,
) -> Vec<SummarizedPlanFeature> {
    plan.plan
        .full_features
        .iter()
        .filter(|feature| feature.display_in_summary == Some(true))
        .filter_map(|feature| {
            let Some(names) = plan.plan.feature_names_by_locale.get(&feature.feature_name)
            else {
                tracing::debug!(
                    plan_id = %plan.id(),
                    feature = %feature.feature_name,
                    "Plan feature has no name entry, skipping"
                );
                return None;
            };

            Some(SummarizedPlanFeature {
                displayed_feature_name: names.select(locale).unwrap_or_default().to_string(),
                description: feature
                    .description_by_locale
                    .as_ref()
                    .and_then(|description| description.select(locale))
                    .map(String::from),
                enabled: feature.enabled,
                unlimited: feature.unlimited.filter(|set| *set),
                upcoming: feature.upcoming.filter(|set| *set),
                trial_like: feature.trial_like.filter(|set| *set),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entitlement::fixtures::plan_with;
    use crate::models::{MessageByLocale, PlanFeature};

    fn feature(name: &str) -> PlanFeature {
        PlanFeature {
            feature_name: name.to_string(),
            pillar_name: "publish".to_string(),
            description_by_locale: None,
            tooltip_by_locale: None,
            enabled: None,
            unlimited: None,
            upcoming: None,
            trial_like: None,
            display_in_summary: None,
        }
    }

    fn plan(features: Vec<PlanFeature>) -> SubscriptionPlanWithPricingSystems {
        let mut plan = plan_with("gdevelop_silver", false, vec![]);
        for name in ["builds", "cloudProjects", "leaderboards", "multiplayer"] {
            plan.plan.feature_names_by_locale.insert(
                name.to_string(),
                MessageByLocale::new()
                    .with("en", format!("{name} (en)"))
                    .with("fr", format!("{name} (fr)")),
            );
        }
        plan.plan.full_features = features;
        plan
    }

    #[test]
    fn test_only_summary_features_are_kept() {
        let mut hidden = feature("builds");
        hidden.enabled = Some(FeatureAvailability::Yes);
        hidden.unlimited = Some(true);
        let mut explicitly_hidden = feature("leaderboards");
        explicitly_hidden.display_in_summary = Some(false);
        let mut shown = feature("cloudProjects");
        shown.display_in_summary = Some(true);

        let summary = summarize_plan_features(&plan(vec![hidden, explicitly_hidden, shown]), "en");

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].displayed_feature_name, "cloudProjects (en)");
    }

    #[test]
    fn test_unset_flags_are_absent_not_false() {
        let mut shown = feature("cloudProjects");
        shown.display_in_summary = Some(true);

        let summary = summarize_plan_features(&plan(vec![shown]), "en");
        let json = serde_json::to_value(&summary[0]).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys, vec!["displayedFeatureName".to_string()]);
    }

    #[test]
    fn test_set_flags_and_description_are_copied() {
        let mut shown = feature("multiplayer");
        shown.display_in_summary = Some(true);
        shown.enabled = Some(FeatureAvailability::No);
        shown.upcoming = Some(true);
        shown.trial_like = Some(false);
        shown.description_by_locale = Some(
            MessageByLocale::new()
                .with("en", "Online lobbies")
                .with("fr", "Salons en ligne"),
        );
        shown.tooltip_by_locale = Some(MessageByLocale::new().with("en", "tooltip"));

        let summary = summarize_plan_features(&plan(vec![shown]), "fr_FR");

        let entry = &summary[0];
        assert_eq!(entry.displayed_feature_name, "multiplayer (fr)");
        assert_eq!(entry.description.as_deref(), Some("Salons en ligne"));
        assert_eq!(entry.enabled, Some(FeatureAvailability::No));
        assert_eq!(entry.upcoming, Some(true));
        assert_eq!(entry.unlimited, None);
        assert_eq!(entry.trial_like, None);

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["enabled"], "no");
        assert!(json.get("trialLike").is_none());
        assert!(json.get("tooltip").is_none());
    }

    #[test]
    fn test_feature_without_localized_name_is_skipped() {
        let mut unnamed = feature("secretFeature");
        unnamed.display_in_summary = Some(true);
        let mut named = feature("builds");
        named.display_in_summary = Some(true);

        let summary = summarize_plan_features(&plan(vec![unnamed, named]), "en");

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].displayed_feature_name, "builds (en)");
    }

    #[test]
    fn test_feature_with_empty_name_map_keeps_empty_name() {
        let mut shown = feature("builds");
        shown.display_in_summary = Some(true);
        let mut plan = plan(vec![shown]);
        plan.plan
            .feature_names_by_locale
            .insert("builds".to_string(), MessageByLocale::new());

        let summary = summarize_plan_features(&plan, "en");

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].displayed_feature_name, "");
    }
}
