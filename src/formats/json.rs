// JSON export and import of decoded packet trees

use crate::packet::{DecoderConfig, Packet, PacketError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid packet tree: {0}")]
    Packet(#[from] PacketError),
}

pub type Result<T> = std::result::Result<T, JsonError>;

/// Serialize a packet tree to pretty-printed JSON
pub fn to_json(packet: &Packet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(packet)
}

/// Load a packet tree from JSON, accepting the same nesting as the default
/// decoder configuration
pub fn from_json(json: &str) -> Result<Packet> {
    from_json_with_config(json, DecoderConfig::default())
}

/// Load a packet tree from JSON.
///
/// Each packet level takes two JSON nesting levels (the packet object and
/// its `children` array), so serde_json's own recursion limit is lifted and
/// `config.max_depth` bounds the tree instead.
pub fn from_json_with_config(json: &str, config: DecoderConfig) -> Result<Packet> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let packet = Packet::deserialize(&mut deserializer)?;
    deserializer.end()?;

    if packet.depth() > config.max_depth {
        return Err(PacketError::DepthLimitExceeded(config.max_depth).into());
    }
    Ok(packet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Operator;
    use crate::transmission::Transmission;

    #[test]
    fn test_json_shape() {
        let packet = Packet::Operator {
            version: 1,
            op: Operator::LessThan,
            children: vec![Packet::literal(6, 10).unwrap()],
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&packet).unwrap()).unwrap();
        assert_eq!(value["type"], "operator");
        assert_eq!(value["op"], "less_than");
        assert_eq!(value["version"], 1);
        assert_eq!(value["children"][0]["type"], "literal");
        assert_eq!(value["children"][0]["value"], 10);
    }

    #[test]
    fn test_decoded_tree_survives_json() {
        let transmission = Transmission::from_hex("9C0141080250320F1802104A08").unwrap();
        let json = to_json(transmission.root()).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(&loaded, transmission.root());
        assert_eq!(loaded.evaluate().unwrap(), 1);
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let json = r#"{"type": "operator", "version": 0, "op": "divide", "children": []}"#;
        assert!(matches!(from_json(json), Err(JsonError::Json(_))));
    }

    #[test]
    fn test_version_out_of_range_rejected() {
        let json = r#"{"type": "literal", "version": 200, "value": 1}"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, JsonError::Json(_)));
        assert!(err.to_string().contains("Version 200 does not fit in 3 bits"));

        let json = r#"{"type": "operator", "version": 1, "op": "sum", "children": [
            {"type": "literal", "version": 8, "value": 1}
        ]}"#;
        assert!(from_json(json).is_err());

        let json = r#"{"type": "literal", "version": 7, "value": 1}"#;
        assert_eq!(from_json(json).unwrap(), Packet::literal(7, 1).unwrap());
    }

    #[test]
    fn test_trailing_data_rejected() {
        let json = r#"{"type": "literal", "version": 1, "value": 1} []"#;
        assert!(matches!(from_json(json), Err(JsonError::Json(_))));
    }

    fn nested(levels: usize) -> Packet {
        (0..levels).fold(Packet::literal(1, 7).unwrap(), |child, _| Packet::Operator {
            version: 2,
            op: Operator::Sum,
            children: vec![child],
        })
    }

    #[test]
    fn test_deep_tree_survives_json() {
        // Deep trees outgrow the default test thread stack in debug builds
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| {
                let max_depth = DecoderConfig::default().max_depth;

                let tree = nested(max_depth);
                assert_eq!(tree.depth(), max_depth);
                let loaded = from_json(&to_json(&tree).unwrap()).unwrap();
                assert_eq!(loaded, tree);
                assert_eq!(loaded.evaluate().unwrap(), 7);

                let too_deep = nested(max_depth + 1);
                assert!(matches!(
                    from_json(&to_json(&too_deep).unwrap()),
                    Err(JsonError::Packet(PacketError::DepthLimitExceeded(limit))) if limit == max_depth
                ));
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_depth_config() {
        let json = to_json(&nested(3)).unwrap();
        let config = DecoderConfig::new().with_max_depth(2);
        assert!(matches!(
            from_json_with_config(&json, config),
            Err(JsonError::Packet(PacketError::DepthLimitExceeded(2)))
        ));
        let config = DecoderConfig::new().with_max_depth(3);
        assert_eq!(from_json_with_config(&json, config).unwrap(), nested(3));
    }
}
