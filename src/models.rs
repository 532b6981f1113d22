use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Serde helper: parse an optional `f64` from a JSON number, a numeric string, or `null`.
///
/// Protobuf JSON encodes 64-bit integers as strings, so totals and values may arrive
/// either way.
pub(crate) fn de_opt_f64_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<f64>().map(Some).map_err(E::custom)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

/// Serde helper: parse an optional `i64` from a JSON number, a numeric string, or `null`.
pub(crate) fn de_opt_i64_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    match de_opt_f64_from_string_or_number(deserializer)? {
        None => Ok(None),
        Some(v) if v.is_finite() && v.fract() == 0.0 => Ok(Some(v as i64)),
        Some(v) => Err(D::Error::custom(format!("expected an integer, got {v}"))),
    }
}

/// Serde helper: per-axis indexes where anything that is not an integer (negative
/// numbers included) becomes `None` instead of failing the whole document.
fn de_lenient_indexes<'de, D>(deserializer: D) -> Result<Vec<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .map(|v| match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .collect())
}

// ---- Tagged attribute values ----

/// Reference to a moment (subcategory, sentiment, emotion) by its resource name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MomentRef {
    pub moment_name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl MomentRef {
    pub fn new(moment_name: impl Into<String>) -> Self {
        Self {
            moment_name: moment_name.into(),
            kind: None,
        }
    }
}

/// Adherence qualifier attached to a behavior value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AdherenceType {
    #[serde(rename = "ADHERENCE_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ADHERENCE_TYPE_DID_DO_X")]
    DidDoX,
    #[serde(rename = "ADHERENCE_TYPE_DID_NOT_DO_X")]
    DidNotDoX,
    #[serde(rename = "ADHERENCE_TYPE_SHOULD_DO_X")]
    ShouldDoX,
    #[serde(rename = "ADHERENCE_TYPE_NO_OPPORTUNITY_TO_DO_X")]
    NoOpportunityToDoX,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorRef {
    pub behavior_name: String,
    pub adherence_types: Vec<AdherenceType>,
}

/// A literal metadata value (exactly one side is normally set).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetadataScalar {
    pub string_value: Option<String>,
    pub boolean_value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeBound {
    #[serde(deserialize_with = "de_opt_f64_from_string_or_number")]
    pub value: Option<f64>,
    pub is_exclusive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericValueRange {
    pub lower_bound: Option<RangeBound>,
    pub upper_bound: Option<RangeBound>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetadataAttribute {
    pub moment_name: String,
    pub values: Vec<MetadataScalar>,
    pub numeric_value_ranges: Vec<NumericValueRange>,
}

/// One grouping/filter value. Exactly one variant applies; when a payload carries
/// several fields, the first one in declaration order wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum AttributeValue {
    Subcategory(MomentRef),
    Behavior(BehaviorRef),
    Sentiment(MomentRef),
    Emotion(MomentRef),
    Metadata(MetadataAttribute),
    UserName(String),
    GroupName(String),
    Timestamp(String),
    UsecaseName(String),
    String(String),
    Int(i64),
    Bool(bool),
    /// Payload with no recognized field; kept verbatim.
    Unrecognized(Value),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAttributeValue {
    subcategory_value: Option<MomentRef>,
    behavior_value: Option<BehaviorRef>,
    sentiment_value: Option<MomentRef>,
    emotion_value: Option<MomentRef>,
    metadata_value: Option<MetadataAttribute>,
    user_name_value: Option<String>,
    group_name_value: Option<String>,
    timestamp: Option<String>,
    usecase_name_value: Option<String>,
    string_value: Option<String>,
    #[serde(deserialize_with = "de_opt_i64_from_string_or_number")]
    int_value: Option<i64>,
    bool_value: Option<bool>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

impl TryFrom<Value> for AttributeValue {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw: RawAttributeValue = serde_json::from_value(value.clone())?;
        let resolved = if let Some(v) = raw.subcategory_value {
            AttributeValue::Subcategory(v)
        } else if let Some(v) = raw.behavior_value {
            AttributeValue::Behavior(v)
        } else if let Some(v) = raw.sentiment_value {
            AttributeValue::Sentiment(v)
        } else if let Some(v) = raw.emotion_value {
            AttributeValue::Emotion(v)
        } else if let Some(v) = raw.metadata_value {
            AttributeValue::Metadata(v)
        } else if let Some(v) = non_empty(raw.user_name_value) {
            AttributeValue::UserName(v)
        } else if let Some(v) = non_empty(raw.group_name_value) {
            AttributeValue::GroupName(v)
        } else if let Some(v) = non_empty(raw.timestamp) {
            AttributeValue::Timestamp(v)
        } else if let Some(v) = non_empty(raw.usecase_name_value) {
            AttributeValue::UsecaseName(v)
        } else if let Some(v) = raw.string_value {
            AttributeValue::String(v)
        } else if let Some(v) = raw.int_value {
            AttributeValue::Int(v)
        } else if let Some(v) = raw.bool_value {
            AttributeValue::Bool(v)
        } else {
            AttributeValue::Unrecognized(value)
        };
        Ok(resolved)
    }
}

impl AttributeValue {
    pub fn is_timestamp(&self) -> bool {
        matches!(self, AttributeValue::Timestamp(_))
    }

    pub fn usecase_name(&self) -> Option<&str> {
        match self {
            AttributeValue::UsecaseName(name) => Some(name),
            _ => None,
        }
    }
}

// ---- Chart configuration ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ChartDisplayType {
    #[serde(rename = "BAR_CHART")]
    BarChart,
    #[serde(rename = "LINE_CHART")]
    LineChart,
    #[serde(rename = "PIE_CHART")]
    PieChart,
    #[serde(rename = "TABLE_CHART")]
    TableChart,
    /// Requests a document (PDF) export; charted with the fallback layout.
    #[serde(rename = "PDF_EXPORT")]
    PdfExport,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CommonStatsType {
    #[serde(rename = "COMMON_STATS_TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "COMMON_STATS_TYPE_CONVERSATION_COUNT")]
    ConversationCount,
    #[serde(rename = "COMMON_STATS_TYPE_OCCURRENCE_COUNT")]
    OccurrenceCount,
    #[serde(rename = "COMMON_STATS_TYPE_PERCENTAGE")]
    Percentage,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AggregationOperator {
    #[serde(rename = "AGGREGATION_OPERATOR_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "AGGREGATION_OPERATOR_AVG")]
    Avg,
    #[serde(rename = "AGGREGATION_OPERATOR_SUM")]
    Sum,
    #[serde(rename = "AGGREGATION_OPERATOR_MAX")]
    Max,
    #[serde(rename = "AGGREGATION_OPERATOR_MIN")]
    Min,
    #[serde(rename = "AGGREGATION_OPERATOR_P25")]
    P25,
    #[serde(rename = "AGGREGATION_OPERATOR_P50")]
    P50,
    #[serde(rename = "AGGREGATION_OPERATOR_P75")]
    P75,
    #[serde(other)]
    Other,
}

/// Conversation-level attribute aggregated by a conversation metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ConversationAttribute {
    #[serde(rename = "CONVERSATION_DURATION")]
    Duration,
    #[serde(rename = "CONVERSATION_HANDLE_TIME")]
    HandleTime,
    #[serde(rename = "CONVERSATION_MESSAGE_COUNT")]
    MessageCount,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversationAttributeAggregation {
    pub aggregation_operator: Option<AggregationOperator>,
    pub aggregation_attribute: Option<ConversationAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatorAggregation {
    pub aggregation_operator: Option<AggregationOperator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsType {
    pub common_stats_type: Option<CommonStatsType>,
    pub aggregation_on_conversation_attribute: Option<ConversationAttributeAggregation>,
    pub aggregation_on_metadata_value: Option<OperatorAggregation>,
    pub aggregation_on_occurrence_count_per_conversation: Option<OperatorAggregation>,
}

impl StatsType {
    pub fn common(common: CommonStatsType) -> Self {
        Self {
            common_stats_type: Some(common),
            ..Self::default()
        }
    }

    pub fn is_conversation_count(&self) -> bool {
        self.common_stats_type == Some(CommonStatsType::ConversationCount)
    }

    pub fn is_percentage(&self) -> bool {
        self.common_stats_type == Some(CommonStatsType::Percentage)
    }

    /// Conversation count or percentage of conversations: both are backed by the
    /// grouped filter total.
    pub fn is_conversation_count_like(&self) -> bool {
        self.is_conversation_count() || self.is_percentage()
    }

    pub fn conversation_attribute(&self) -> Option<ConversationAttribute> {
        self.aggregation_on_conversation_attribute
            .as_ref()
            .and_then(|a| a.aggregation_attribute)
    }

    pub fn conversation_attribute_operator(&self) -> Option<AggregationOperator> {
        self.aggregation_on_conversation_attribute
            .as_ref()
            .and_then(|a| a.aggregation_operator)
    }

    pub fn metadata_operator(&self) -> Option<AggregationOperator> {
        self.aggregation_on_metadata_value
            .as_ref()
            .and_then(|a| a.aggregation_operator)
    }

    pub fn per_conversation_operator(&self) -> Option<AggregationOperator> {
        self.aggregation_on_occurrence_count_per_conversation
            .as_ref()
            .and_then(|a| a.aggregation_operator)
    }

    /// Operator used to reduce values: the conversation attribute's operator, else the
    /// metadata aggregation's.
    pub fn aggregation_operator(&self) -> Option<AggregationOperator> {
        self.conversation_attribute_operator()
            .or_else(|| self.metadata_operator())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForSubcategory {
    pub subcategories: Vec<MomentRef>,
    pub stats_type: StatsType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForBehavior {
    pub behaviors: Vec<BehaviorRef>,
    pub stats_type: StatsType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForSentiment {
    pub sentiments: Vec<MomentRef>,
    pub stats_type: StatsType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForEmotion {
    pub emotions: Vec<MomentRef>,
    pub stats_type: StatsType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForMetadata {
    pub metadata_keys: Vec<MomentRef>,
    pub stats_type: StatsType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForConversation {
    pub stats_type: StatsType,
}

/// What a metric measures.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MetricTarget {
    Subcategory(ForSubcategory),
    Behavior(ForBehavior),
    Sentiment(ForSentiment),
    Emotion(ForEmotion),
    Metadata(ForMetadata),
    Conversation(ForConversation),
    #[default]
    Unspecified,
}

impl MetricTarget {
    pub fn stats_type(&self) -> Option<&StatsType> {
        match self {
            MetricTarget::Subcategory(m) => Some(&m.stats_type),
            MetricTarget::Behavior(m) => Some(&m.stats_type),
            MetricTarget::Sentiment(m) => Some(&m.stats_type),
            MetricTarget::Emotion(m) => Some(&m.stats_type),
            MetricTarget::Metadata(m) => Some(&m.stats_type),
            MetricTarget::Conversation(m) => Some(&m.stats_type),
            MetricTarget::Unspecified => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawMetricConfig")]
pub struct MetricConfig {
    /// Ordered palette declared on the metric, possibly empty.
    pub colors: Vec<String>,
    pub target: MetricTarget,
}

impl MetricConfig {
    pub fn new(target: MetricTarget) -> Self {
        Self {
            colors: Vec::new(),
            target,
        }
    }

    pub fn stats_type(&self) -> Option<&StatsType> {
        self.target.stats_type()
    }

    pub fn is_conversation_count_like(&self) -> bool {
        self.stats_type()
            .is_some_and(StatsType::is_conversation_count_like)
    }

    pub fn is_conversation_count(&self) -> bool {
        self.stats_type()
            .is_some_and(StatsType::is_conversation_count)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MetricRenderingConfig {
    colors: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawMetricConfig {
    rendering_config: Option<MetricRenderingConfig>,
    for_subcategory: Option<ForSubcategory>,
    for_behavior: Option<ForBehavior>,
    for_sentiment: Option<ForSentiment>,
    for_emotion: Option<ForEmotion>,
    for_metadata: Option<ForMetadata>,
    for_conversation: Option<ForConversation>,
}

impl From<RawMetricConfig> for MetricConfig {
    fn from(raw: RawMetricConfig) -> Self {
        let target = if let Some(m) = raw.for_subcategory {
            MetricTarget::Subcategory(m)
        } else if let Some(m) = raw.for_behavior {
            MetricTarget::Behavior(m)
        } else if let Some(m) = raw.for_sentiment {
            MetricTarget::Sentiment(m)
        } else if let Some(m) = raw.for_emotion {
            MetricTarget::Emotion(m)
        } else if let Some(m) = raw.for_metadata {
            MetricTarget::Metadata(m)
        } else if let Some(m) = raw.for_conversation {
            MetricTarget::Conversation(m)
        } else {
            MetricTarget::Unspecified
        };
        Self {
            colors: raw.rendering_config.map(|r| r.colors).unwrap_or_default(),
            target,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DurationBeforeNow {
    #[serde(deserialize_with = "de_opt_i64_from_string_or_number")]
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelativeTimestamp {
    pub duration_before_now: Option<DurationBeforeNow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeEndpoint {
    pub relative_timestamp: Option<RelativeTimestamp>,
    pub timestamp: Option<String>,
}

impl RangeEndpoint {
    pub fn relative_days(&self) -> Option<i64> {
        self.relative_timestamp
            .as_ref()?
            .duration_before_now
            .as_ref()?
            .days
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeValue {
    pub from_value: Option<RangeEndpoint>,
    pub to_value: Option<RangeEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SingleValues {
    pub attribute_values: Vec<AttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeValues {
    pub range_values: Vec<RangeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterValueSet {
    pub single_values: Option<SingleValues>,
    pub range_values: Option<RangeValues>,
}

/// Filter predicate; only read for subtitle text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartFilter {
    pub target_attribute: Option<String>,
    pub operator: Option<String>,
    pub value_set: Option<FilterValueSet>,
}

impl ChartFilter {
    pub fn single_values(&self) -> &[AttributeValue] {
        self.value_set
            .as_ref()
            .and_then(|v| v.single_values.as_ref())
            .map(|s| s.attribute_values.as_slice())
            .unwrap_or_default()
    }

    pub fn range_values(&self) -> &[RangeValue] {
        self.value_set
            .as_ref()
            .and_then(|v| v.range_values.as_ref())
            .map(|r| r.range_values.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataConfig {
    pub metrics: Vec<MetricConfig>,
    pub filters: Vec<ChartFilter>,
    /// Group-by keys; only their count matters here.
    pub group_by: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartRenderingConfig {
    pub chart_display_type: Option<ChartDisplayType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub display_name: Option<String>,
    pub data_config: DataConfig,
    pub rendering_config: ChartRenderingConfig,
}

impl ChartConfig {
    /// The first configured metric; later ones are ignored.
    pub fn metric(&self) -> Option<&MetricConfig> {
        self.data_config.metrics.first()
    }

    pub fn display_type(&self) -> Option<ChartDisplayType> {
        self.rendering_config.chart_display_type
    }
}

// ---- Evaluation results ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupByValue {
    pub value: Option<AttributeValue>,
}

/// One grouping dimension and its possible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupByAxis {
    pub group_by_values: Vec<GroupByValue>,
}

impl GroupByAxis {
    pub fn value_at(&self, index: usize) -> Option<&AttributeValue> {
        self.group_by_values.get(index)?.value.as_ref()
    }
}

/// One data point: a value plus, per axis, an index into that axis' values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsNumber {
    #[serde(deserialize_with = "de_opt_f64_from_string_or_number")]
    pub value: Option<f64>,
    /// Raw indexes; negative or out-of-range entries resolve to nothing.
    #[serde(deserialize_with = "de_lenient_indexes")]
    pub group_by_value_indexes: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationData {
    pub group_by_values_for_all_keys: Vec<GroupByAxis>,
    pub analytics_numbers: Vec<AnalyticsNumber>,
    #[serde(deserialize_with = "de_opt_f64_from_string_or_number")]
    pub groups_as_filters_total: Option<f64>,
    #[serde(deserialize_with = "de_opt_f64_from_string_or_number")]
    pub ungrouped_total: Option<f64>,
}

impl EvaluationData {
    /// Values of every data point that carries one.
    pub fn values(&self) -> Vec<f64> {
        self.analytics_numbers.iter().filter_map(|n| n.value).collect()
    }
}

// ---- Display-name lookup tables ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamedEntity {
    pub display_name: Option<String>,
}

impl NamedEntity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MomentInfo {
    pub display_name: Option<String>,
    pub taxonomy_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// One described option of a metadata key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetadataOption {
    pub value: Option<MetadataScalar>,
    pub description: Option<String>,
}

/// Read-only lookup tables keyed by stable resource names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataMaps {
    #[serde(alias = "moments")]
    pub categories_by_name: HashMap<String, MomentInfo>,
    pub behaviors_by_name: HashMap<String, NamedEntity>,
    pub sentiments_by_name: HashMap<String, NamedEntity>,
    pub emotions_by_name: HashMap<String, NamedEntity>,
    pub metadata_values_by_name: HashMap<String, Vec<MetadataOption>>,
    pub metadata_keys_by_name: HashMap<String, NamedEntity>,
    pub users_by_name: HashMap<String, UserInfo>,
    pub groups_by_name: HashMap<String, NamedEntity>,
    #[serde(alias = "usecases")]
    pub usecases_by_name: HashMap<String, NamedEntity>,
}

/// Display name of an entry in a [`NamedEntity`] table.
pub(crate) fn display_name_in<'a>(
    table: &'a HashMap<String, NamedEntity>,
    key: &str,
) -> Option<&'a str> {
    table.get(key)?.display_name.as_deref()
}
