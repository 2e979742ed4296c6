use pagecodec::{
    ByteArrayCodec, Bytes, Error, GroupCodec, IntCodec, Position, Result, SearchableGroupCodec,
    StringCodec,
};

#[test]
fn test_search_absent_returns_insertion_point() -> Result<()> {
    let codec = ByteArrayCodec::default();
    let run = codec.from_values(["b", "d", "f"].map(|v| Bytes::from_static(v.as_bytes())))?;

    let cases = [("a", 0, -1), ("c", 1, -2), ("e", 2, -3), ("g", 3, -4)];
    for (target, point, signed) in cases {
        let position = codec.search(&run, &Bytes::from_static(target.as_bytes()))?;
        assert_eq!(position, Position::Insert(point));
        assert_eq!(position.to_signed(), signed);
        assert!(!position.is_found());
    }

    let position = codec.search(&run, &Bytes::from_static(b"d"))?;
    assert_eq!(position, Position::Found(1));
    assert_eq!(position.to_signed(), 1);

    Ok(())
}

#[test]
fn test_signed_position_roundtrip() {
    for position in [
        Position::Found(0),
        Position::Found(41),
        Position::Insert(0),
        Position::Insert(7),
    ] {
        assert_eq!(Position::from_signed(position.to_signed()), position);
    }
    assert_eq!(Position::from_signed(-1), Position::Insert(0));
}

#[test]
fn test_search_empty_run() -> Result<()> {
    let codec = IntCodec::<u64>::default();

    assert_eq!(codec.search(&codec.empty(), &9)?, Position::Insert(0));

    Ok(())
}

#[test]
fn test_inserting_at_insertion_point_keeps_order() -> Result<()> {
    let codec = IntCodec::<i32>::default();
    let mut run = codec.empty();

    for value in [50, -3, 17, 99, 0, 17, 64] {
        let index = codec.search(&run, &value)?.index();
        run = codec.insert(&run, index, value)?;
    }

    assert_eq!(codec.to_values(&run)?, vec![-3, 0, 17, 17, 50, 64, 99]);

    Ok(())
}

#[test]
fn test_search_by_reverse_order() -> Result<()> {
    let codec = IntCodec::<i32>::default();
    let run = codec.from_values([30, 20, 10])?;

    assert_eq!(
        codec.search_by(&run, &20, |a, b| b.cmp(a))?,
        Position::Found(1)
    );
    assert_eq!(
        codec.search_by(&run, &25, |a, b| b.cmp(a))?,
        Position::Insert(1)
    );
    assert_eq!(
        codec.search_by(&run, &5, |a, b| b.cmp(a))?,
        Position::Insert(3)
    );

    Ok(())
}

#[test]
fn test_adapter_search_by_custom_collation() -> Result<()> {
    let codec = StringCodec::default();
    let run = codec.from_values(["apple", "Banana", "cherry"].map(String::from))?;
    let collate = |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase());

    assert_eq!(
        codec.search_by(&run, &"BANANA".to_owned(), collate)?,
        Position::Found(1)
    );
    assert_eq!(
        codec.search_by(&run, &"Blueberry".to_owned(), collate)?,
        Position::Insert(2)
    );

    Ok(())
}

#[test]
fn test_adapter_search_by_surfaces_bad_probes() -> Result<()> {
    let bytes = ByteArrayCodec::default();
    let run = bytes.from_values([
        Bytes::from_static(b"a"),
        Bytes::from_static(b"\xff\xfe"),
        Bytes::from_static(b"z"),
    ])?;

    let strings = StringCodec::default();
    let err = strings
        .search_by(&run, &"m".to_owned(), |a, b| a.cmp(b))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));

    Ok(())
}
