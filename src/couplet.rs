use serde::{Deserialize, Serialize};

/// A generated Spring Festival couplet.
///
/// Field names on the wire are the Chinese keys the model is instructed to
/// emit. Every field is required when decoding; a payload missing one of them
/// is rejected instead of producing a partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couplet {
    #[serde(rename = "上联")]
    pub upper: String,
    #[serde(rename = "下联")]
    pub lower: String,
    #[serde(rename = "横批")]
    pub horizontal: String,
    #[serde(rename = "总结")]
    pub summary: String,
}

impl Couplet {
    /// The couplet shown to users when generation fails for any reason.
    pub fn fallback() -> Self {
        Self {
            upper: "网络断线心慌慌".to_string(),
            lower: "请求失败意茫茫".to_string(),
            horizontal: "网事难成".to_string(),
            summary: "寄".to_string(),
        }
    }
}
