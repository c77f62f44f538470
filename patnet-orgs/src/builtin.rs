//! Built-in legal-entity alias table for the tracked technology firms.

use patnet_core::models::{AliasEdge, RelationshipType};

/// Canonical firm → observed legal-entity names.
const FIRM_ENTITIES: &[(&str, &[&str])] = &[
    (
        "Baidu",
        &[
            "Baidu, Inc.",
            "BEIJING BAIDU NETCOM SCIENCE TECHNOLOGY CO., LTD.",
            "BAIDU ONLINE NETWORK TECHNOLOGY (BEIJING) CO., LTD.",
        ],
    ),
    (
        "Alibaba",
        &[
            "Alibaba Group Holding Limited",
            "ALIBABA (CHINA) CO., LTD.",
            "Alibaba Damo (Hangzhou) Technology Co., Ltd.",
            "Alibaba Cloud Computing Co., Ltd.",
            "Alibaba Singapore Holding Private Limited",
            "ALIBABA TECHNOLOGY (ISRAEL) LTD.",
            "Alibaba Innovation Private Limited",
        ],
    ),
    (
        "Tencent",
        &[
            "Tencent Holdings Ltd.",
            "TENCENT AMERICA LLC",
            "TENCENT TECHNOLOGIES (SHENZHEN) COMPANY LIMITED",
            "TENCENT CLOUD COMPUTING (BEIJING) CO., LTD.",
            "Tencent Music Entertainment Technology (Shenzhen) Co., Ltd.",
        ],
    ),
    (
        "ByteDance",
        &[
            "ByteDance Ltd.",
            "BEIJING BYTEDANCE NETWORK TECHNOLOGY CO., LTD.",
            "TIANJIN BYTEDANCE TECHNOLOGY CO., LTD.",
            "Beijing Zitiao Network Technology Co., Ltd.",
            "BYTEDANCE INC.",
        ],
    ),
    (
        "Google",
        &[
            "Google LLC",
            "Google Inc.",
            "GOOGLE TECHNOLOGY HOLDINGS LLC",
            "Alphabet Communications, Inc.",
            "Alphabet Inc.",
        ],
    ),
    (
        "Meta",
        &[
            "Meta Platforms, Inc.",
            "Facebook, Inc.",
            "Meta Platforms Technologies, LLC",
            "Facebook Technologies, LLC",
        ],
    ),
    ("Apple", &["Apple Inc."]),
    (
        "Amazon",
        &[
            "Amazon.com, Inc.",
            "Amazon Technologies, Inc.",
            "Amazon Technology, Inc.",
        ],
    ),
    (
        "Microsoft",
        &[
            "Microsoft Corporation",
            "MICROSOFT TECHNOLOGY LICENSING, LLC",
            "Microsoft Licensing Technology, LLC",
        ],
    ),
    ("OpenAI", &["OpenAI, Inc.", "OpenAi OPCo, LLC."]),
    ("Anthropic", &["Anthropic PBC"]),
    ("Hugging Face", &["Hugging Face, Inc."]),
    ("Cohere", &["Cohere Technologies, Inc."]),
    (
        "Nvidia",
        &[
            "NVIDIA CORPORATION",
            "NVIDIA Technologies, Inc.",
            "Nvidia Denmark ApS",
            "Nvidia Technology UK Limited",
        ],
    ),
    (
        "Tesla",
        &[
            "Tesla, Inc.",
            "Tesla Motors, Inc.",
            "Tesla Motors Canada ULC",
            "TESLA GROHMANN AUTOMATION GMBH",
        ],
    ),
    (
        "Uber",
        &[
            "Uber Technologies, Inc.",
            "Uber Technology, Inc.",
            "UBER HOLDINGS LIMITED",
        ],
    ),
    ("Waymo", &["Waymo LLC"]),
    ("IBM", &["IBM Corporation", "IBM INTERNATIONAL GROUP BV"]),
    (
        "Intel",
        &[
            "Intel Corporation",
            "Intel NDTM US LLC",
            "Intel IP Corporation",
            "Intel Germany GmbH & Co. KG",
        ],
    ),
    (
        "Qualcomm",
        &["QUALCOMM Incorporated", "QUALCOMM Technologies, Inc."],
    ),
    ("Adobe", &["Adobe Inc."]),
    (
        "Oracle",
        &[
            "Oracle Corporation",
            "Oracle International Corporation",
            "ORACLE SYSTEMS CORPORATION",
            "Oracle Financial Services Software Limited",
        ],
    ),
];

/// The built-in table as alias rows, all `legal_entity`.
pub fn default_alias_table() -> Vec<AliasEdge> {
    FIRM_ENTITIES
        .iter()
        .flat_map(|(canonical, variants)| {
            variants
                .iter()
                .map(move |v| AliasEdge::new(*v, *canonical, RelationshipType::LegalEntity))
        })
        .collect()
}

/// Canonical firm names of the built-in table.
pub fn canonical_firms() -> impl Iterator<Item = &'static str> {
    FIRM_ENTITIES.iter().map(|(canonical, _)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::OrgAliasResolver;

    #[test]
    fn builtin_table_builds_and_is_acyclic() {
        let resolver = OrgAliasResolver::with_builtin_table().unwrap();
        assert_eq!(resolver.canonical_names().len(), canonical_firms().count());
    }

    #[test]
    fn manual_case_variant_resolves() {
        let resolver = OrgAliasResolver::with_builtin_table().unwrap();
        let c = resolver.resolve("ALIBABA INNOVATION PRIVATE LIMITED").unwrap();
        assert_eq!(c.name, "Alibaba");
    }
}
