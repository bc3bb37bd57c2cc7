use anyhow::Result;
use pretty_assertions::assert_eq;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};
use trailkit_core::{DeletedSnapshot, Error, SnapshotId};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn snapshot_id_set_get_round_trip() -> Result<()> {
    let mut outcome = DeletedSnapshot::default();
    assert!(outcome.snapshot_id().is_none());
    outcome.set_snapshot_id("s-0123456789")?;
    assert_eq!(
        Some("s-0123456789"),
        outcome.snapshot_id().map(SnapshotId::as_str)
    );
    Ok(())
}

#[test]
fn snapshot_id_rejects_malformed_values() -> Result<()> {
    let mut outcome = DeletedSnapshot::default();
    outcome.set_snapshot_id("s-00aabbccdd")?;
    let malformed = [
        "",
        "s-",
        "t-0123456789",
        "s-012345678",
        "s-0123456789ab",
        "S-0123456789",
        "s-0123G56789",
        "s-0123g56789",
    ];
    for value in malformed {
        let result = outcome.set_snapshot_id(value);
        assert!(matches!(
            result,
            Err(Error::InvalidField {
                field: "snapshot_id",
                ..
            })
        ));
        // a failed set leaves the previous value in place
        assert_eq!(
            Some("s-00aabbccdd"),
            outcome.snapshot_id().map(SnapshotId::as_str)
        );
    }
    Ok(())
}

#[test]
fn clone_is_equal_and_independent() -> Result<()> {
    let original = DeletedSnapshot::new("s-00aabbccdd".parse()?);
    let mut copy = original.clone();
    assert_eq!(original, copy);
    assert_eq!(hash_of(&original), hash_of(&copy));

    copy.set_snapshot_id("s-ffeeddccbb")?;
    assert_ne!(original, copy);
    assert_eq!(
        Some("s-00aabbccdd"),
        original.snapshot_id().map(SnapshotId::as_str)
    );
    Ok(())
}

#[test]
fn absent_identifiers_are_equal() {
    let left = DeletedSnapshot::default();
    let right = DeletedSnapshot::default();
    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn decoding_revalidates_identifier() -> Result<()> {
    let decoded: DeletedSnapshot =
        serde_json::from_str(r#"{"SnapshotId":"s-00aabbccdd"}"#)?;
    assert_eq!(
        Some("s-00aabbccdd"),
        decoded.snapshot_id().map(SnapshotId::as_str)
    );

    let result =
        serde_json::from_str::<DeletedSnapshot>(r#"{"SnapshotId":"bogus"}"#);
    assert!(result.is_err());
    Ok(())
}
