use pagecodec::{
    ByteArrayCodec, Bytes, Error, GroupCodec, GroupFormat, Input, IntCodec, Position, Result,
    SearchableGroupCodec, StringCodec,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn byte_values(values: &[&str]) -> Vec<Bytes> {
    values
        .iter()
        .map(|v| Bytes::copy_from_slice(v.as_bytes()))
        .collect()
}

#[test]
fn test_string_run_scenario() -> Result<()> {
    let codec = StringCodec::default();
    let run = codec.from_values(strings(&["a", "bb", "ccc"]))?;

    let bytes = codec.group_to_bytes(&run)?;
    let decoded = codec.group_decode(&mut Input::from(bytes), 3)?;
    assert_eq!(decoded, run);
    assert_eq!(codec.to_values(&decoded)?, strings(&["a", "bb", "ccc"]));

    assert_eq!(codec.search(&run, &"bb".to_owned())?, Position::Found(1));

    let removed = codec.delete_at(&run, 1)?;
    assert_eq!(codec.to_values(&removed)?, strings(&["a", "ccc"]));
    assert_eq!(codec.size(&run), 3);
    assert_eq!(codec.to_values(&run)?, strings(&["a", "bb", "ccc"]));

    Ok(())
}

#[test]
fn test_plain_byte_layout() -> Result<()> {
    let codec = ByteArrayCodec::default();
    let run = codec.from_values(byte_values(&["a", "bb", "ccc"]))?;

    let bytes = codec.group_to_bytes(&run)?;
    assert_eq!(bytes.as_ref(), b"\x00\x01\x02\x03abbccc");

    Ok(())
}

#[test]
fn test_compact_byte_layout() -> Result<()> {
    let codec = ByteArrayCodec::new(GroupFormat::Compact);
    let values = byte_values(&["user:1", "user:22", "user:333"]);
    let run = codec.from_values(values.clone())?;

    let bytes = codec.group_to_bytes(&run)?;
    assert_eq!(bytes.as_ref(), b"\x01\x05user:\x01\x02\x03122333");

    let decoded = codec.group_decode(&mut Input::from(bytes), 3)?;
    assert_eq!(codec.to_values(&decoded)?, values);

    Ok(())
}

#[test]
fn test_compact_falls_back_without_shared_prefix() -> Result<()> {
    let codec = ByteArrayCodec::new(GroupFormat::Compact);

    let run = codec.from_values(byte_values(&["a", "b"]))?;
    assert_eq!(codec.group_to_bytes(&run)?[0], GroupFormat::Plain.tag());

    let single = codec.from_values(byte_values(&["prefix"]))?;
    assert_eq!(codec.group_to_bytes(&single)?[0], GroupFormat::Plain.tag());

    // One shared byte over two values only pays for its own header.
    let even = codec.from_values(byte_values(&["ab", "ac"]))?;
    let bytes = codec.group_to_bytes(&even)?;
    assert_eq!(bytes.as_ref(), b"\x00\x02\x02abac");

    let shorter = codec.from_values(byte_values(&["abc", "abd"]))?;
    let bytes = codec.group_to_bytes(&shorter)?;
    assert_eq!(bytes.as_ref(), b"\x01\x02ab\x01\x01cd");

    Ok(())
}

#[test]
fn test_compact_decode_enforces_run_limit() -> Result<()> {
    // Eight prefix bytes repeated for ten empty suffixes expand to 80 bytes.
    let mut header = vec![1, 8];
    header.extend_from_slice(b"abcdefgh");
    header.extend_from_slice(&[0; 10]);

    let codec = ByteArrayCodec::new(GroupFormat::Compact).with_max_run_bytes(64);
    let err = codec
        .group_decode(&mut Input::from(header.clone()), 10)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    let codec = codec.with_max_run_bytes(80);
    let run = codec.group_decode(&mut Input::from(header), 10)?;
    assert_eq!(codec.get(&run, 9)?, Bytes::from_static(b"abcdefgh"));

    Ok(())
}

#[test]
fn test_decoder_accepts_either_format() -> Result<()> {
    let plain = ByteArrayCodec::new(GroupFormat::Plain);
    let compact = ByteArrayCodec::new(GroupFormat::Compact);
    let values = byte_values(&["key/a", "key/b", "key/c"]);

    let run = plain.from_values(values.clone())?;
    let from_plain = compact.group_decode(&mut Input::from(plain.group_to_bytes(&run)?), 3)?;
    let from_compact = plain.group_decode(&mut Input::from(compact.group_to_bytes(&run)?), 3)?;

    assert_eq!(from_plain, run);
    assert_eq!(from_compact, run);

    Ok(())
}

#[test]
fn test_group_decode_rejects_missing_elements() -> Result<()> {
    let codec = ByteArrayCodec::default();
    let run = codec.from_values(byte_values(&["a", "bb", "ccc"]))?;
    let bytes = codec.group_to_bytes(&run)?;

    let err = codec
        .group_decode(&mut Input::from(bytes.clone()), 4)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    let truncated = bytes.slice(..bytes.len() - 1);
    let err = codec
        .group_decode(&mut Input::from(truncated), 3)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    Ok(())
}

#[test]
fn test_group_decode_rejects_unknown_tag() {
    let codec = ByteArrayCodec::default();

    let err = codec.group_decode(&mut Input::from(vec![7]), 0).unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));
}

#[test]
fn test_empty_run() -> Result<()> {
    let codec = StringCodec::default();
    let run = codec.empty();

    let bytes = codec.group_to_bytes(&run)?;
    assert_eq!(bytes.as_ref(), &[0]);

    let decoded = codec.group_decode(&mut Input::from(bytes), 0)?;
    assert_eq!(codec.size(&decoded), 0);
    assert!(decoded.is_empty());

    Ok(())
}

#[test]
fn test_group_decode_leaves_trailing_data() -> Result<()> {
    let codec = IntCodec::<u16>::default();
    let run = codec.from_values([1, 258])?;

    let mut bytes = codec.group_to_bytes(&run)?.to_vec();
    assert_eq!(bytes, vec![0, 1, 0, 2, 1]);
    bytes.extend_from_slice(b"tail");

    let mut input = Input::from(bytes);
    let decoded = codec.group_decode(&mut input, 2)?;
    assert_eq!(decoded, run);
    assert_eq!(input.remaining(), 4);

    Ok(())
}

#[test]
fn test_put_and_insert_are_pure() -> Result<()> {
    let codec = IntCodec::<u32>::default();
    let run = codec.from_values([10, 20, 30])?;

    let put = codec.put(&run, 1, 25)?;
    assert_eq!(codec.to_values(&put)?, vec![10, 25, 30]);

    let appended = codec.insert(&run, 3, 40)?;
    assert_eq!(codec.to_values(&appended)?, vec![10, 20, 30, 40]);

    let prepended = codec.insert(&run, 0, 5)?;
    assert_eq!(codec.to_values(&prepended)?, vec![5, 10, 20, 30]);

    let deleted = codec.delete_at(&run, 0)?;
    assert_eq!(codec.to_values(&deleted)?, vec![20, 30]);

    assert_eq!(codec.to_values(&run)?, vec![10, 20, 30]);

    Ok(())
}

#[test]
fn test_index_bounds() -> Result<()> {
    let codec = IntCodec::<u32>::default();
    let run = codec.from_values([10, 20, 30])?;

    assert!(matches!(
        codec.get(&run, 3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        codec.put(&run, 3, 1),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        codec.insert(&run, 4, 1),
        Err(Error::IndexOutOfRange { index: 4, len: 3 })
    ));
    assert!(matches!(
        codec.delete_at(&run, 3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        codec.get(&codec.empty(), 0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));

    Ok(())
}

#[test]
fn test_copy_range() -> Result<()> {
    let codec = IntCodec::<u32>::default();
    let run = codec.from_values([10, 20, 30])?;

    assert_eq!(codec.to_values(&codec.copy_range(&run, 1, 3)?)?, vec![20, 30]);
    assert_eq!(codec.to_values(&codec.copy_range(&run, 0, 3)?)?, vec![10, 20, 30]);
    assert_eq!(codec.size(&codec.copy_range(&run, 2, 2)?), 0);

    assert!(matches!(
        codec.copy_range(&run, 2, 4),
        Err(Error::IndexOutOfRange { index: 4, len: 3 })
    ));
    assert!(matches!(
        codec.copy_range(&run, 3, 2),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));

    Ok(())
}

#[test]
fn test_int_compact_layout() -> Result<()> {
    let codec = IntCodec::<u64>::new(GroupFormat::Compact);
    let run = codec.from_values([1000, 1001, 1005, 2000])?;

    let bytes = codec.group_to_bytes(&run)?;
    assert_eq!(bytes.as_ref(), &[1, 0xd0, 0x0f, 0x02, 0x08, 0xc6, 0x0f]);

    let decoded = codec.group_decode(&mut Input::from(bytes), 4)?;
    assert_eq!(decoded, run);

    Ok(())
}

#[test]
fn test_int_compact_handles_unsorted_and_extremes() -> Result<()> {
    let codec = IntCodec::<i64>::new(GroupFormat::Compact);
    let values = vec![-5, 7, -100, i64::MIN, i64::MAX, 0];
    let run = codec.from_values(values.clone())?;

    let decoded = codec.group_decode(&mut Input::from(codec.group_to_bytes(&run)?), 6)?;
    assert_eq!(codec.to_values(&decoded)?, values);

    let codec = IntCodec::<u8>::new(GroupFormat::Compact);
    let values = vec![255, 0, 128, 1];
    let run = codec.from_values(values.clone())?;
    let decoded = codec.group_decode(&mut Input::from(codec.group_to_bytes(&run)?), 4)?;
    assert_eq!(codec.to_values(&decoded)?, values);

    Ok(())
}

#[test]
fn test_int_compact_rejects_out_of_range_values() -> Result<()> {
    // A delta of 1000 fits a u64 but not a u8.
    let err = IntCodec::<u8>::new(GroupFormat::Compact)
        .group_decode(&mut Input::from(vec![1, 0xd0, 0x0f]), 1)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    // 2 then -3: the running value dips below zero.
    let err = IntCodec::<u16>::new(GroupFormat::Compact)
        .group_decode(&mut Input::from(vec![1, 0x04, 0x05]), 2)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    // Negative values of signed types stay valid.
    let codec = IntCodec::<i8>::new(GroupFormat::Compact);
    let run = codec.group_decode(&mut Input::from(vec![1, 0x03, 0xfb, 0x01]), 2)?;
    assert_eq!(codec.to_values(&run)?, vec![-2, i8::MIN]);

    Ok(())
}

#[test]
fn test_int_plain_rejects_short_input() -> Result<()> {
    let codec = IntCodec::<u32>::default();
    let run = codec.from_values([1, 2])?;

    let err = codec
        .group_decode(&mut Input::from(codec.group_to_bytes(&run)?), 3)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    Ok(())
}
