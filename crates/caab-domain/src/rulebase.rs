//! Assessment rulebases and the assessment names they deploy

use crate::names::eq_ignore_case;

/// A rulebase deployed to the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentRulebase {
    /// Financial eligibility of the client
    Means,
    /// Merits of the case
    Merits,
    /// Claims for payment
    Billing,
    /// Payments on account
    Poa,
}

impl AssessmentRulebase {
    /// Every rulebase
    pub const ALL: [AssessmentRulebase; 4] = [
        AssessmentRulebase::Means,
        AssessmentRulebase::Merits,
        AssessmentRulebase::Billing,
        AssessmentRulebase::Poa,
    ];

    /// Rulebase type / category code
    pub fn rulebase_type(&self) -> &'static str {
        match self {
            AssessmentRulebase::Means => "MEANS",
            AssessmentRulebase::Merits => "MERITS",
            AssessmentRulebase::Billing => "BILLING",
            AssessmentRulebase::Poa => "POA",
        }
    }

    /// Assessment name the rulebase produces
    pub fn assessment_name(&self) -> &'static str {
        match self {
            AssessmentRulebase::Means => "meansAssessment",
            AssessmentRulebase::Merits => "meritsAssessment",
            AssessmentRulebase::Billing => "billingAssessment",
            AssessmentRulebase::Poa => "poaAssessment",
        }
    }

    /// Whether this is a financial (billing / payment) assessment
    pub fn is_financial(&self) -> bool {
        matches!(self, AssessmentRulebase::Billing | AssessmentRulebase::Poa)
    }

    /// Name of the pre-populated companion assessment
    pub fn pre_pop_assessment_name(&self) -> String {
        format!("{}_PREPOP", self.assessment_name())
    }

    /// Find a rulebase by its type code (case-insensitive)
    pub fn find_by_type(rulebase_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rulebase| eq_ignore_case(rulebase.rulebase_type(), rulebase_type))
    }

    /// Rulebases that are not financial assessments
    pub fn non_financial() -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|rulebase| !rulebase.is_financial())
            .collect()
    }
}

/// Concrete assessment names, including pre-populated companions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentName {
    /// `meansAssessment`
    Means,
    /// `meansAssessment_PREPOP`
    MeansPrepop,
    /// `meritsAssessment`
    Merits,
    /// `meritsAssessment_PREPOP`
    MeritsPrepop,
    /// `billingAssessment`
    Billing,
    /// `billingAssessment_PREPOP`
    BillingPrepop,
    /// `poaAssessment`
    Poa,
    /// `poaAssessment_PREPOP`
    PoaPrepop,
}

impl AssessmentName {
    /// Every assessment name
    pub const ALL: [AssessmentName; 8] = [
        AssessmentName::Means,
        AssessmentName::MeansPrepop,
        AssessmentName::Merits,
        AssessmentName::MeritsPrepop,
        AssessmentName::Billing,
        AssessmentName::BillingPrepop,
        AssessmentName::Poa,
        AssessmentName::PoaPrepop,
    ];

    /// Name as stored on documents
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentName::Means => "meansAssessment",
            AssessmentName::MeansPrepop => "meansAssessment_PREPOP",
            AssessmentName::Merits => "meritsAssessment",
            AssessmentName::MeritsPrepop => "meritsAssessment_PREPOP",
            AssessmentName::Billing => "billingAssessment",
            AssessmentName::BillingPrepop => "billingAssessment_PREPOP",
            AssessmentName::Poa => "poaAssessment",
            AssessmentName::PoaPrepop => "poaAssessment_PREPOP",
        }
    }

    /// Rulebase that produces this assessment
    pub fn rulebase(&self) -> AssessmentRulebase {
        match self {
            AssessmentName::Means | AssessmentName::MeansPrepop => AssessmentRulebase::Means,
            AssessmentName::Merits | AssessmentName::MeritsPrepop => AssessmentRulebase::Merits,
            AssessmentName::Billing | AssessmentName::BillingPrepop => AssessmentRulebase::Billing,
            AssessmentName::Poa | AssessmentName::PoaPrepop => AssessmentRulebase::Poa,
        }
    }

    /// Whether this is a pre-populated companion
    pub fn is_prepop(&self) -> bool {
        matches!(
            self,
            AssessmentName::MeansPrepop
                | AssessmentName::MeritsPrepop
                | AssessmentName::BillingPrepop
                | AssessmentName::PoaPrepop
        )
    }

    /// Names whose rulebase has the given type code (case-insensitive)
    pub fn by_category(category: &str) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|name| eq_ignore_case(name.rulebase().rulebase_type(), category))
            .collect()
    }
}
