//! Payload schemas of the performance reports published by the fee distributor oracle.
//!
//! Only the fields the eligibility rules read are modelled; everything else in a report is
//! ignored during deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_json::Value;

use crate::operator::OperatorId;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`null_as_default`], and also replaces `null` map values with their default.
fn null_entries_as_default<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: Ord + Deserialize<'de>,
    V: Default + Deserialize<'de>,
{
    let entries = Option::<BTreeMap<K, Option<V>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

/// Reads a reward amount given as an integer of any size or as a decimal string.
///
/// Amounts beyond `i128` saturate, which keeps their sign.
fn rewards_from_number_or_string<'de, D>(deserializer: D) -> Result<i128, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rewards = match &value {
        Value::Null => Some(0),
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
            .or_else(|| number.as_f64().map(|float| float as i128)),
        Value::String(string) => parse_rewards(string.trim()),
        _ => None,
    };
    rewards.ok_or_else(|| D::Error::custom(format!("{value} is not a reward amount")))
}

fn parse_rewards(string: &str) -> Option<i128> {
    string.parse::<i128>().ok().or_else(|| {
        string
            .parse::<f64>()
            .ok()
            .filter(|float| float.is_finite())
            .map(|float| float as i128)
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Report {
    #[serde(default, deserialize_with = "null_as_default")]
    pub threshold: f64,
    #[serde(default, deserialize_with = "null_entries_as_default")]
    pub operators: BTreeMap<OperatorId, V1Operator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Operator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub validators: BTreeMap<String, V1Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V1Validator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub perf: ValidatorPerf,
}

/// Attestation duties assigned to a validator within a frame and how many were included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorPerf {
    #[serde(default)]
    pub assigned: u64,
    #[serde(default)]
    pub included: u64,
}

impl ValidatorPerf {
    /// A validator with no assignments has nothing to fail and always passes.
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        if self.assigned == 0 {
            return true;
        }
        (self.included as f64 / self.assigned as f64) >= threshold
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Report {
    #[serde(default, deserialize_with = "null_entries_as_default")]
    pub operators: BTreeMap<OperatorId, V2Operator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct V2Operator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub validators: BTreeMap<String, V2Validator>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2Validator {
    #[serde(default, deserialize_with = "rewards_from_number_or_string")]
    pub distributed_rewards: i128,
}
