#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_override_dir_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("nested").join("data");

    let dir = resolve_data_dir(Some(target.clone().into_os_string())).unwrap();

    assert_eq!(dir, target);
    assert!(target.is_dir());
}
