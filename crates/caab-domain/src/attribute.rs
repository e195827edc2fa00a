//! Attribute identifiers mapped between applications and assessments
//!
//! Only the attributes the application maps into an assessment are listed;
//! documents may carry many more, which are still reachable by raw name.

use std::fmt;

use crate::names::eq_ignore_case;

/// Declared value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValueType {
    /// Free text
    Text,
    /// Literal `true` / `false`
    Boolean,
    /// `yyyy-MM-dd`
    Date,
    /// Decimal amount in pounds
    Currency,
    /// Decimal number
    Number,
}

impl AttributeValueType {
    /// Type name as written in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeValueType::Text => "text",
            AttributeValueType::Boolean => "boolean",
            AttributeValueType::Date => "date",
            AttributeValueType::Currency => "currency",
            AttributeValueType::Number => "number",
        }
    }
}

macro_rules! assessment_attributes {
    ($($(#[$section:meta])* $variant:ident => $name:literal, $kind:ident;)*) => {
        /// Identifier of an attribute on an assessment entity
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AssessmentAttribute {
            $(
                $(#[$section])*
                #[doc = $name]
                $variant,
            )*
        }

        impl AssessmentAttribute {
            /// Every known attribute identifier
            pub const ALL: &'static [AssessmentAttribute] = &[$(AssessmentAttribute::$variant),*];

            /// Attribute name as written by the rules engine
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(AssessmentAttribute::$variant => $name,)*
                }
            }

            /// Declared value type
            pub fn value_type(&self) -> AttributeValueType {
                match self {
                    $(AssessmentAttribute::$variant => AttributeValueType::$kind,)*
                }
            }
        }
    };
}

assessment_attributes! {
    // proceedings
    ClientInvolvementType => "CLIENT_INVOLVEMENT_TYPE", Text;
    LeadProceeding => "LEAD_PROCEEDING", Boolean;
    LevelOfService => "LEVEL_OF_SERVICE", Text;
    MatterType => "MATTER_TYPE", Text;
    NewOrExisting => "NEW_OR_EXISTING", Text;
    ProceedingId => "PROCEEDING_ID", Text;
    ProceedingName => "PROCEEDING_NAME", Text;
    ProceedingOrderType => "PROCEEDING_ORDER_TYPE", Text;
    RequestedScope => "REQUESTED_SCOPE", Text;
    ScopeLimitIsDefault => "SCOPE_LIMIT_IS_DEFAULT", Boolean;

    // opponents
    OpponentDob => "OPPONENT_DOB", Date;
    OtherPartyId => "OTHER_PARTY_ID", Text;
    OtherPartyName => "OTHER_PARTY_NAME", Text;
    OtherPartyType => "OTHER_PARTY_TYPE", Text;
    RelationshipToCase => "RELATIONSHIP_TO_CASE", Text;
    RelationshipToClient => "RELATIONSHIP_TO_CLIENT", Text;

    // global
    ApplicationCaseRef => "APPLICATION_CASE_REF", Text;
    AppAmendType => "APP_AMEND_TYPE", Text;
    CategoryOfLaw => "CATEGORY_OF_LAW", Text;
    ClientVulnerable => "CLIENT_VULNERABLE", Boolean;
    CostLimitChangedFlag => "COST_LIMIT_CHANGED_FLAG", Text;
    Country => "COUNTRY", Text;
    County => "COUNTY", Text;
    DateAssessmentStarted => "DATE_ASSESSMENT_STARTED", Date;
    DateOfBirth => "DATE_OF_BIRTH", Date;
    DefaultCostLimitation => "DEFAULT_COST_LIMITATION", Currency;
    DelegatedFunctionsDate => "DELEGATED_FUNCTIONS_DATE", Date;
    DevolvedPowersContractFlag => "DEVOLVED_POWERS_CONTRACT_FLAG", Text;
    EcfFlag => "ECF_FLAG", Boolean;
    FirstName => "FIRST_NAME", Text;
    HighProfile => "HIGH_PROFILE", Boolean;
    HomeOfficeNo => "HOME_OFFICE_NO", Text;
    LarScopeFlag => "LAR_SCOPE_FLAG", Boolean;
    LeadProceedingChanged => "LEAD_PROCEEDING_CHANGED", Boolean;
    MaritialStatus => "MARITIAL_STATUS", Text;
    MeansEvidenceReqd => "MEANS_EVIDENCE_REQD", Boolean;
    MeritsEvidenceReqd => "MERITS_EVIDENCE_REQD", Boolean;
    NewApplOrAmendment => "NEW_APPL_OR_AMENDMENT", Text;
    NiNo => "NI_NO", Text;
    PoaOrBillFlag => "POA_OR_BILL_FLAG", Text;
    PostCode => "POST_CODE", Text;
    ProviderCaseReference => "PROVIDER_CASE_REFERENCE", Text;
    ProviderHasContract => "PROVIDER_HAS_CONTRACT", Boolean;
    ReqCostLimitation => "REQ_COST_LIMITATION", Currency;
    Surname => "SURNAME", Text;
    SurnameAtBirth => "SURNAME_AT_BIRTH", Text;
    UserProviderFirmId => "USER_PROVIDER_FIRM_ID", Number;
    UserType => "USER_TYPE", Text;
}

impl AssessmentAttribute {
    /// Whether an attribute name refers to this identifier
    pub fn matches(&self, name: &str) -> bool {
        eq_ignore_case(self.as_str(), name)
    }

    /// Parse an attribute name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.matches(s))
    }
}

impl fmt::Display for AssessmentAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AssessmentAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid attribute: {}", s))
    }
}
