use serde::{Deserialize, Serialize};

/// A ViaCEP address document.
///
/// Known keys are typed; anything the service adds later lands in `extra`,
/// in the order it was received.
/// Serializing a record yields exactly the keys that were received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(rename = "cep", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "logradouro", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "complemento", default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "unidade", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "bairro", default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(rename = "localidade", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "uf", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(rename = "regiao", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "ibge", default, skip_serializing_if = "Option::is_none")]
    pub ibge_code: Option<String>,
    #[serde(rename = "gia", default, skip_serializing_if = "Option::is_none")]
    pub gia_code: Option<String>,
    #[serde(rename = "ddd", default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(rename = "siafi", default, skip_serializing_if = "Option::is_none")]
    pub siafi_code: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AddressRecord {
    /// 以 ViaCEP 的欄位名稱列出所有有值的欄位：已知欄位依 ViaCEP 的順序，
    /// 額外欄位依收到的順序排在最後
    pub fn fields(&self) -> Vec<(String, String)> {
        let known = [
            ("cep", &self.postal_code),
            ("logradouro", &self.street),
            ("complemento", &self.complement),
            ("unidade", &self.unit),
            ("bairro", &self.neighborhood),
            ("localidade", &self.city),
            ("uf", &self.state),
            ("estado", &self.state_name),
            ("regiao", &self.region),
            ("ibge", &self.ibge_code),
            ("gia", &self.gia_code),
            ("ddd", &self.area_code),
            ("siafi", &self.siafi_code),
        ];

        let mut fields: Vec<(String, String)> = known
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
            .collect();

        for (key, value) in &self.extra {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            fields.push((key.clone(), text));
        }

        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(AddressRecord),
    NotFound,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn record(&self) -> Option<&AddressRecord> {
        match self {
            LookupResult::Found(record) => Some(record),
            LookupResult::NotFound => None,
        }
    }

    pub fn into_record(self) -> Option<AddressRecord> {
        match self {
            LookupResult::Found(record) => Some(record),
            LookupResult::NotFound => None,
        }
    }
}
