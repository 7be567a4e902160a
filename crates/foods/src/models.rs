//! The USDA SR record schemas.
//!
//! One struct per collection. Field docs carry the dataset's own help text and
//! surface in the OpenAPI schema; storage-level typing, length assertions, and
//! uniqueness indexes live in the bootstrap schema. References hold the
//! referenced record's natural key.

use nhub_database::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use surrealdb::types::SurrealValue;
use utoipa::ToSchema;

/// Footnote adding information to the food description.
pub const FOOTNOTE_DESC: &str = "D";
/// Footnote adding information to a measure description.
pub const FOOTNOTE_MEAS: &str = "M";
/// Footnote providing additional information on a nutrient value.
pub const FOOTNOTE_NUTR: &str = "N";

/// Valid footnote kinds.
pub const FOOTNOTE_KINDS: [&str; 3] = [FOOTNOTE_DESC, FOOTNOTE_MEAS, FOOTNOTE_NUTR];

/// A food item.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Food {
    /// Nutrient Databank number that uniquely identifies a food item.
    pub ndb_number: i64,
    /// Code of the food group to which a food item belongs.
    pub food_group: i64,
    /// Description of food item.
    pub long_description: String,
    /// Abbreviated description of food item.
    pub short_description: String,
    /// Other names commonly used to describe a food, including local or regional
    /// names, for example, "soda" or "pop" for "carbonated beverages".
    pub common_name: Option<String>,
    /// Company that manufactured the product, when appropriate.
    pub manufacturer_name: Option<String>,
    /// Whether the food item is used in the USDA Food and Nutrient Database for
    /// Dietary Studies (FNDDS) and thus has a complete profile for the 65 FNDDS nutrients.
    #[serde(default)]
    pub survey: bool,
    /// Description of inedible parts of a food item (refuse), such as seeds or bone.
    pub refuse_description: Option<String>,
    /// Percentage of refuse.
    pub refuse_percentage: Option<i64>,
    /// Scientific name of the food item, given for the least processed form
    /// (usually raw), if applicable.
    pub scientific_name: Option<String>,
    /// Factor for converting nitrogen to protein.
    pub nitrogen_factor: Option<f64>,
    /// Factor for calculating calories from protein.
    pub protein_factor: Option<f64>,
    /// Factor for calculating calories from fat.
    pub fat_factor: Option<f64>,
    /// Factor for calculating calories from carbohydrate.
    pub cho_factor: Option<f64>,
}

impl Record for Food {
    const TABLE: &'static str = "food";
    const TITLE: &'static str = "Foods";
    const ORDER_BY: &'static str = "ndb_number";

    fn key(&self) -> String {
        self.ndb_number.to_string()
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.long_description)
    }
}

/// A food group.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FoodGroup {
    /// Code identifying a food group. Codes may not be consecutive.
    pub code: i64,
    /// Name of food group.
    pub description: String,
}

impl Record for FoodGroup {
    const TABLE: &'static str = "food_group";
    const TITLE: &'static str = "Food Groups";
    const ORDER_BY: &'static str = "code";

    fn key(&self) -> String {
        self.code.to_string()
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A nutrient or food component.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Nutrient {
    /// Unique identifier code for a nutrient.
    pub number: i64,
    /// Units of measure (mg, g, and so on).
    pub units: String,
    /// International Network of Food Data Systems (INFOODS) tagname: a unique
    /// abbreviation for a nutrient/food component developed to aid in the
    /// interchange of data.
    pub tagname: Option<String>,
    /// Name of nutrient/food component.
    pub description: String,
    /// Number of decimal places to which a nutrient value is rounded.
    pub decimals: i64,
    /// Sort order for nutrient records, matching reports produced from SR.
    pub sort_order: i64,
}

impl Record for Nutrient {
    const TABLE: &'static str = "nutrient";
    const TITLE: &'static str = "Nutrients";
    const ORDER_BY: &'static str = "number";

    fn key(&self) -> String {
        self.number.to_string()
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A nutrient value for one food.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NutrientData {
    /// NDB number of the food this value belongs to.
    pub food: i64,
    /// Number of the nutrient this value measures.
    pub nutrient: i64,
    /// Amount in 100 grams, edible portion.
    pub nutrient_value: f64,
    /// Number of analyses used to calculate the nutrient value.
    /// If 0, the value was calculated or imputed.
    pub data_points: i64,
    /// Standard error of the mean. Absent if it cannot be calculated.
    pub standard_error: Option<f64>,
    /// Codes of the sources describing the type of nutrient data.
    pub source: Vec<i64>,
    /// Derivation code giving specific information on how the value is determined.
    pub data_derivation: Option<String>,
    /// NDB number of the item used to impute a missing value. Populated only for
    /// items added or updated starting with SR14.
    pub reference_ndb_number: Option<i64>,
    /// Vitamin or mineral added for fortification or enrichment. Populated for
    /// ready-to-eat breakfast cereals and many brand-name hot cereals in food group 8.
    #[serde(default)]
    pub added_nutrient: bool,
    /// Number of studies.
    pub number_of_studies: Option<i64>,
    /// Minimum value.
    pub minimum: Option<f64>,
    /// Maximum value.
    pub maximum: Option<f64>,
    /// Degrees of freedom.
    pub degrees_of_freedom: Option<i64>,
    /// Lower 95% error bound.
    pub lower_error_bound: Option<f64>,
    /// Upper 95% error bound.
    pub upper_error_bound: Option<f64>,
    /// Statistical comments.
    pub statistical_comments: Option<String>,
    /// Confidence code indicating data quality.
    pub confidence_code: Option<String>,
}

impl Record for NutrientData {
    const TABLE: &'static str = "nutrient_data";
    const TITLE: &'static str = "Nutrient Data";
    const ORDER_BY: &'static str = "food, nutrient";

    fn key(&self) -> String {
        format!("{}:{}", self.food, self.nutrient)
    }
}

impl fmt::Display for NutrientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.food, self.nutrient)
    }
}

/// A source type for nutrient data.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Source {
    /// Code identifying the type of nutrient data.
    pub code: i64,
    /// Description of source code that identifies the type of nutrient data.
    pub description: String,
}

impl Record for Source {
    const TABLE: &'static str = "source";
    const TITLE: &'static str = "Sources";
    const ORDER_BY: &'static str = "code";

    fn key(&self) -> String {
        self.code.to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A data derivation code.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataDerivation {
    /// Derivation code.
    pub code: String,
    /// Description of how the nutrient value was determined.
    pub description: String,
}

impl Record for DataDerivation {
    const TABLE: &'static str = "data_derivation";
    const TITLE: &'static str = "Data Derivations";
    const ORDER_BY: &'static str = "code";

    fn key(&self) -> String {
        self.code.clone()
    }
}

impl fmt::Display for DataDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A household measure for one food.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Weight {
    /// NDB number of the food this measure belongs to.
    pub food: i64,
    /// Sequence number.
    pub sequence: i64,
    /// Unit modifier (for example, 1 in "1 cup").
    pub amount: f64,
    /// Description (for example, cup, diced, and 1-inch pieces).
    pub description: String,
    /// Gram weight.
    pub gram_weight: f64,
    /// Number of data points.
    pub number_of_data_points: Option<f64>,
    /// Standard deviation.
    pub standard_deviation: Option<f64>,
}

impl Record for Weight {
    const TABLE: &'static str = "weight";
    const TITLE: &'static str = "Weights";
    const ORDER_BY: &'static str = "food, sequence";

    fn key(&self) -> String {
        format!("{}:{}", self.food, self.sequence)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (food {}) {}g", self.amount, self.description, self.food, self.gram_weight)
    }
}

/// A footnote attached to a food, a measure, or a nutrient value.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footnote {
    /// NDB number of the food this footnote belongs to.
    pub food: i64,
    /// Sequence number. A footnote applying to more than one nutrient number
    /// reuses the same footnote number.
    pub number: i64,
    /// Type of footnote: one of [`FOOTNOTE_KINDS`].
    pub kind: String,
    /// Number of the nutrient the footnote applies to, for nutrient-value footnotes.
    pub nutrient: Option<i64>,
    /// Footnote text.
    pub text: String,
}

impl Record for Footnote {
    const TABLE: &'static str = "footnote";
    const TITLE: &'static str = "Footnotes";
    const ORDER_BY: &'static str = "food, number";

    fn key(&self) -> String {
        let nutrient = self.nutrient.map_or_else(|| "-".to_owned(), |n| n.to_string());
        format!("{}:{}:{}", self.food, self.number, nutrient)
    }
}

impl fmt::Display for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A bibliographic reference for nutrient data.
#[derive(Debug, Clone, Serialize, Deserialize, SurrealValue, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataSource {
    /// Unique id of the reference/source.
    pub source_id: String,
    /// Authors of a journal article, or the name of the sponsoring organization
    /// for other documents.
    pub authors: String,
    /// Title of the article, or name of the document (such as a report from a
    /// company or trade association).
    pub title: String,
    /// Year the article or document was published.
    pub year: Option<i64>,
    /// Name of the journal in which the article was published.
    pub journal: Option<String>,
    /// Volume number for journal articles, books, or reports; city of the
    /// sponsoring organization otherwise.
    pub volume_or_city: String,
    /// Issue number for a journal article; state of the sponsoring organization otherwise.
    pub issue_or_state: String,
    /// Starting page number of the article/document.
    pub start_page: Option<i64>,
    /// Ending page number of the article/document.
    pub end_page: Option<i64>,
}

impl Record for DataSource {
    const TABLE: &'static str = "data_source";
    const TITLE: &'static str = "Data Sources";
    const ORDER_BY: &'static str = "source_id";

    fn key(&self) -> String {
        self.source_id.clone()
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_keys_join_with_colon() {
        let data = NutrientData {
            food: 1001,
            nutrient: 203,
            nutrient_value: 0.85,
            data_points: 16,
            standard_error: None,
            source: vec![1],
            data_derivation: None,
            reference_ndb_number: None,
            added_nutrient: false,
            number_of_studies: None,
            minimum: None,
            maximum: None,
            degrees_of_freedom: None,
            lower_error_bound: None,
            upper_error_bound: None,
            statistical_comments: None,
            confidence_code: None,
        };
        assert_eq!(data.key(), "1001:203");
        assert_eq!(data.to_string(), "1001 - 203");
    }

    #[test]
    fn footnote_key_handles_missing_nutrient() {
        let footnote = Footnote {
            food: 1001,
            number: 2,
            kind: FOOTNOTE_DESC.to_owned(),
            nutrient: None,
            text: "value based on salted butter".to_owned(),
        };
        assert_eq!(footnote.key(), "1001:2:-");

        let footnote = Footnote { nutrient: Some(204), kind: FOOTNOTE_NUTR.to_owned(), ..footnote };
        assert_eq!(footnote.key(), "1001:2:204");
    }

    #[test]
    fn footnote_kinds_are_the_choice_set() {
        assert_eq!(FOOTNOTE_KINDS, ["D", "M", "N"]);
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let group = FoodGroup { code: 100, description: "Dairy and Egg Products".to_owned() };
        let json = serde_json::to_value(&group).expect("serialize");
        assert_eq!(json["code"], 100);

        let weight = Weight {
            food: 1001,
            sequence: 1,
            amount: 1.0,
            description: "cup".to_owned(),
            gram_weight: 227.0,
            number_of_data_points: None,
            standard_deviation: None,
        };
        let json = serde_json::to_value(&weight).expect("serialize");
        assert!(json.get("gramWeight").is_some());
        assert_eq!(weight.to_string(), "1 cup (food 1001) 227g");
    }
}
