use super::*;

#[test]
fn normalize_base_path_root_forms_are_empty() {
    assert_eq!(normalize_base_path(""), "");
    assert_eq!(normalize_base_path("/"), "");
    assert_eq!(normalize_base_path("  //  "), "");
}

#[test]
fn normalize_base_path_adds_leading_and_strips_trailing_slash() {
    assert_eq!(normalize_base_path("preview"), "/preview");
    assert_eq!(normalize_base_path("/preview/"), "/preview");
    assert_eq!(
        normalize_base_path(" /chipify/projects/c24601ee/preview "),
        "/chipify/projects/c24601ee/preview"
    );
}

#[test]
fn normalize_base_path_is_idempotent() {
    let once = normalize_base_path("/a/b/");
    assert_eq!(normalize_base_path(&once), once);
}
