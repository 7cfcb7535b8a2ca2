//! Round-trip and signature-serialization tests for the non-header wire
//! objects

use consensus_wire::{
    ByteReader, ByteWriter, InventoryItem, OutPoint, Sha256Hash, TransactionInput, WireError,
    INV_BLOCK, INV_TX, INV_WITNESS_TX, SIGHASH_ALL, SIGHASH_NONE, SIGHASH_SINGLE,
};
use primitive_types::U256;

fn input_with(index: u32, seq_number: u32, script: &[u8]) -> TransactionInput {
    let mut input = TransactionInput::new(
        index,
        OutPoint::new(Sha256Hash::new([index as u8 + 1; 32]), index),
        seq_number,
    );
    input.set_script_bytes(script.to_vec());
    input
}

/// Sequence number from the last 4 bytes of one serialized input.
fn serialized_seq(bytes: &[u8]) -> u32 {
    let tail: [u8; 4] = bytes[bytes.len() - 4..].try_into().unwrap();
    u32::from_le_bytes(tail)
}

#[test]
fn test_transaction_input_round_trip() {
    let input = input_with(3, 0xffff_fffe, &[0x76, 0xa9, 0x14, 0x00, 0x11]);
    let mut writer = ByteWriter::new();
    input.write(&mut writer);

    let bytes = writer.into_bytes();
    let mut reader = ByteReader::new(&bytes);
    let reopened = TransactionInput::read(&mut reader, 3).unwrap();

    assert_eq!(reopened, input);
    assert_eq!(reopened.out_point(), input.out_point());
    assert_eq!(reopened.script_bytes(), input.script_bytes());
    assert_eq!(reopened.seq_number(), input.seq_number());
    // Spend amount is never serialized and starts at zero
    assert_eq!(reopened.value(), U256::zero());
}

#[test]
fn test_transaction_input_large_script_round_trip() {
    // Script long enough to need a 0xfd varint prefix
    let script = vec![0x6au8; 600];
    let input = input_with(0, 0, &script);
    let mut writer = ByteWriter::new();
    input.write(&mut writer);

    let bytes = writer.into_bytes();
    assert_eq!(bytes.len(), 36 + 3 + 600 + 4);
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(TransactionInput::read(&mut reader, 0).unwrap(), input);
}

#[test]
fn test_transaction_input_truncated_script_rejected() {
    let input = input_with(0, 1, &[0xaa; 20]);
    let mut writer = ByteWriter::new();
    input.write(&mut writer);
    let bytes = writer.into_bytes();

    // Cut into the declared script bytes
    let mut reader = ByteReader::new(&bytes[..40]);
    assert!(matches!(
        TransactionInput::read(&mut reader, 0),
        Err(WireError::TruncatedInput(_))
    ));
}

#[test]
fn test_sighash_all_preserves_every_sequence() {
    let inputs = [input_with(0, 5, &[]), input_with(1, 6, &[]), input_with(2, 7, &[])];
    for input in &inputs {
        let mut writer = ByteWriter::new();
        input.serialize_for_signature(1, SIGHASH_ALL, &[0x51], &mut writer);
        assert_eq!(serialized_seq(writer.as_bytes()), input.seq_number());
    }
}

#[test]
fn test_non_all_hash_type_zeroes_other_sequences() {
    // Three inputs with sequence numbers [5, 6, 7], signing index 1:
    // only input 1 keeps its sequence number
    let inputs = [input_with(0, 5, &[]), input_with(1, 6, &[]), input_with(2, 7, &[])];
    let expected = [0u32, 6, 0];
    for hash_type in [SIGHASH_NONE, SIGHASH_SINGLE] {
        for (input, want) in inputs.iter().zip(expected) {
            let mut writer = ByteWriter::new();
            input.serialize_for_signature(1, hash_type, &[0x51], &mut writer);
            assert_eq!(serialized_seq(writer.as_bytes()), want);
        }
    }
}

#[test]
fn test_signature_serialization_replaces_script() {
    let input = input_with(0, 5, &[0xde, 0xad, 0xbe, 0xef]);
    let substitute = [0x76u8, 0xa9];
    let mut writer = ByteWriter::new();
    input.serialize_for_signature(0, SIGHASH_ALL, &substitute, &mut writer);

    let bytes = writer.into_bytes();
    assert_eq!(bytes[36], substitute.len() as u8);
    assert_eq!(&bytes[37..39], substitute);
    // The input itself is untouched
    assert_eq!(input.script_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_outpoint_round_trip() {
    let outpoint = OutPoint::new(
        Sha256Hash::from_hex("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b")
            .unwrap(),
        1,
    );
    let mut writer = ByteWriter::new();
    outpoint.write(&mut writer);
    let bytes = writer.into_bytes();
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(OutPoint::read(&mut reader).unwrap(), outpoint);
}

#[test]
fn test_inventory_item_round_trip() {
    for item_type in [INV_TX, INV_BLOCK, INV_WITNESS_TX] {
        let item = InventoryItem::new(item_type, Sha256Hash::new([0x5a; 32]));
        let mut writer = ByteWriter::new();
        item.write(&mut writer);
        let bytes = writer.into_bytes();
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(InventoryItem::read(&mut reader).unwrap(), item);
    }
}

#[test]
fn test_consecutive_objects_share_one_stream() {
    let item = InventoryItem::new(INV_TX, Sha256Hash::new([0x0f; 32]));
    let input = input_with(0, 9, &[0x51]);

    let mut writer = ByteWriter::new();
    item.write(&mut writer);
    input.write(&mut writer);

    let bytes = writer.into_bytes();
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(InventoryItem::read(&mut reader).unwrap(), item);
    assert_eq!(TransactionInput::read(&mut reader, 0).unwrap(), input);
    assert_eq!(reader.available(), 0);
}

#[test]
fn test_serde_json_round_trip() {
    let mut input = input_with(1, 0xffff_ffff, &[0x51, 0x52]);
    input.set_value(U256::from(1_000_000u64));
    let json = serde_json::to_string(&input).unwrap();
    let reopened: TransactionInput = serde_json::from_str(&json).unwrap();
    assert_eq!(reopened, input);
    assert_eq!(reopened.value(), U256::from(1_000_000u64));
}
