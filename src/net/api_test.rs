use super::*;

#[test]
fn doc_types_map_to_resource_segments() {
    assert_eq!(doc_type_segment(DocType::Pptx), "presentations");
    assert_eq!(doc_type_segment(DocType::Docx), "documents");
}

#[test]
fn export_url_targets_versioned_api_root() {
    let url = export_url(DocType::Docx, 42);
    assert!(url.ends_with("/api/v1/documents/42/export"), "got {url}");
}

#[test]
fn project_create_serializes_only_relevant_count() {
    let req = ProjectCreate {
        title: "Rust in prod".to_owned(),
        topic: "Adopting Rust".to_owned(),
        doc_type: DocType::Pptx,
        num_slides: Some(8),
        num_pages: None,
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json["doc_type"], "pptx");
    assert_eq!(json["num_slides"], 8);
    assert!(json.get("num_pages").is_none());
}
