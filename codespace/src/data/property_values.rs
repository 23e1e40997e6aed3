use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Deserialize;

/// идентификатор, который возвращается для группы свойств, отсутствующей в данной версии Unicode
pub const PROP_GROUP_INVALID_FOR_VERSION_ID: u32 = 999999;

/// значение перечислимого свойства (PropertyValueAliases.txt)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyValue
{
    pub id: u32,
    pub short_name: String,
    pub long_name: String,
    /// значение является группой (например, General_Category=L)
    #[serde(default)]
    pub is_group: bool,
    /// значения группы, разделенные "|": "Lu | Ll | Lt | Lm | Lo"
    #[serde(default)]
    pub grouped_values: String,
}

impl PropertyValue
{
    /// короткие названия значений, которые покрывает это значение
    pub fn category_values(&self) -> Vec<&str>
    {
        match self.is_group {
            true => self
                .grouped_values
                .split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect(),
            false => vec![self.short_name.as_str()],
        }
    }
}

/// значения одной группы свойств
#[derive(Debug, Default)]
pub struct PropertyValueGroup
{
    by_id: BTreeMap<u32, PropertyValue>,
    /// точные короткие и полные названия
    by_name: HashMap<String, u32>,
    /// нормализованные короткие и полные названия
    by_loose_name: HashMap<String, u32>,
}

impl PropertyValueGroup
{
    fn new(values: impl IntoIterator<Item = PropertyValue>) -> Self
    {
        let by_id: BTreeMap<u32, PropertyValue> = values.into_iter().map(|v| (v.id, v)).collect();
        let mut by_name = HashMap::new();
        let mut by_loose_name = HashMap::new();

        // полные названия перекрывают короткие
        for names in [
            by_id.values().map(|v| (&v.short_name, v.id)).collect::<Vec<_>>(),
            by_id.values().map(|v| (&v.long_name, v.id)).collect::<Vec<_>>(),
        ] {
            for (name, id) in names {
                by_name.insert(name.clone(), id);
                by_loose_name.insert(normalize_loosely(name), id);
            }
        }

        Self {
            by_id,
            by_name,
            by_loose_name,
        }
    }

    pub fn get(&self, id: u32) -> Option<&PropertyValue>
    {
        self.by_id.get(&id)
    }

    pub fn id_by_name(&self, name: &str) -> Option<u32>
    {
        self.by_name.get(name).copied()
    }

    pub fn match_loosely(&self, name: &str) -> Option<&PropertyValue>
    {
        self.by_loose_name
            .get(&normalize_loosely(name))
            .and_then(|id| self.by_id.get(id))
    }

    pub fn values(&self) -> impl Iterator<Item = &PropertyValue>
    {
        self.by_id.values()
    }

    pub fn len(&self) -> usize
    {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.by_id.is_empty()
    }
}

/// prop_values.json в том виде, в котором он хранится на диске
#[derive(Debug, Deserialize)]
pub(crate) struct PropertyValuesFile
{
    #[serde(default)]
    boolean_properties: Vec<String>,
    #[serde(default)]
    missing_prop_groups: Vec<String>,
    #[serde(flatten)]
    groups: HashMap<String, HashMap<String, PropertyValue>>,
}

/// таблицы значений перечислимых свойств для одной версии Unicode
#[derive(Debug, Default)]
pub struct PropertyValues
{
    groups: HashMap<String, PropertyValueGroup>,
    missing_groups: HashSet<String>,
    boolean_properties: Vec<String>,
}

impl From<PropertyValuesFile> for PropertyValues
{
    fn from(file: PropertyValuesFile) -> Self
    {
        Self::new(
            file.groups
                .into_iter()
                .map(|(group, values)| (group, values.into_values().collect())),
            file.missing_prop_groups,
            file.boolean_properties,
        )
    }
}

impl PropertyValues
{
    pub fn new(
        groups: impl IntoIterator<Item = (String, Vec<PropertyValue>)>,
        missing_groups: impl IntoIterator<Item = String>,
        boolean_properties: impl IntoIterator<Item = String>,
    ) -> Self
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(name, values)| (name, PropertyValueGroup::new(values)))
                .collect(),
            missing_groups: missing_groups
                .into_iter()
                .map(|g| g.to_lowercase())
                .collect(),
            boolean_properties: boolean_properties
                .into_iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// группа свойств отсутствует в данной версии Unicode; название без учета регистра,
    /// в prop_values.json группы записаны в нижнем регистре
    pub fn is_missing(&self, group: &str) -> bool
    {
        !self.missing_groups.is_empty() && self.missing_groups.contains(&group.to_lowercase())
    }

    pub fn group(&self, group: &str) -> Option<&PropertyValueGroup>
    {
        self.groups.get(group)
    }

    pub fn value(&self, group: &str, id: u32) -> Option<&PropertyValue>
    {
        self.group(group).and_then(|g| g.get(id))
    }

    /// идентификатор значения по его точному короткому или полному названию
    pub fn id_by_name(&self, group: &str, name: &str) -> Option<u32>
    {
        match self.is_missing(group) {
            true => Some(PROP_GROUP_INVALID_FOR_VERSION_ID),
            false => self.group(group).and_then(|g| g.id_by_name(name)),
        }
    }

    /// названия булевых свойств символов в нижнем регистре
    pub fn boolean_properties(&self) -> &[String]
    {
        &self.boolean_properties
    }

    pub fn group_count(&self) -> usize
    {
        self.groups.len()
    }
}

/// нормализация названий по UAX44-LM3: регистр, пробелы, "-", "_" и префикс "is" не учитываются
pub fn normalize_loosely(name: &str) -> String
{
    let name = name.trim().to_lowercase();

    let name = match name.len() > 2 && name.starts_with("is") {
        true => &name[2 ..],
        false => name.as_str(),
    };

    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect()
}
