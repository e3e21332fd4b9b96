use kvline::{
    tokenize_key, tokenize_value_type, validate_format, FormatError, FormatTokens, Token,
    ValueType,
};

fn collect(fmt: &str) -> (Vec<Result<Token<'_>, FormatError>>, Option<Vec<u8>>) {
    let mut tokens = FormatTokens::new(fmt);
    let items: Vec<_> = tokens.by_ref().collect();
    (items, tokens.message().map(<[u8]>::to_vec))
}

#[test]
fn test_tokenize_key() {
    assert_eq!(tokenize_key(b"key=s"), Ok((&b"key"[..], 4)));
    assert_eq!(tokenize_key(b"k=d rest"), Ok((&b"k"[..], 2)));
}

#[test]
fn test_tokenize_key_skips_spaces_and_tabs() {
    assert_eq!(tokenize_key(b" \t key=d"), Ok((&b"key"[..], 7)));
}

#[test]
fn test_tokenize_key_errors() {
    assert_eq!(
        tokenize_key(b"hello world"),
        Err(FormatError::UnexpectedChar {
            position: 5,
            found: ' '
        })
    );
    assert_eq!(
        tokenize_key(b"  =s"),
        Err(FormatError::EmptyKey { position: 2 })
    );
    assert_eq!(
        tokenize_key(b"hello"),
        Err(FormatError::UnterminatedKey { position: 5 })
    );
    assert_eq!(
        tokenize_key(b" \t "),
        Err(FormatError::EndOfInput { position: 3 })
    );
    assert_eq!(
        tokenize_key(b""),
        Err(FormatError::EndOfInput { position: 0 })
    );
}

#[test]
fn test_tokenize_key_is_restartable() {
    let fmt = b"a=s bb=d";
    let (key, next) = tokenize_key(fmt).unwrap();
    assert_eq!(key, b"a");
    let (_, after_tag) = tokenize_value_type(&fmt[next..]).unwrap();
    let (key, next2) = tokenize_key(&fmt[next + after_tag..]).unwrap();
    assert_eq!(key, b"bb");
    assert_eq!(next + after_tag + next2, 7);
}

#[test]
fn test_tokenize_value_type() {
    assert_eq!(tokenize_value_type(b"s"), Ok((&b"s"[..], 1)));
    assert_eq!(tokenize_value_type(b"*s rest"), Ok((&b"*s"[..], 2)));
    assert_eq!(
        tokenize_value_type(b" d"),
        Err(FormatError::EmptyType { position: 0 })
    );
    assert_eq!(
        tokenize_value_type(b""),
        Err(FormatError::EmptyType { position: 0 })
    );
}

#[test]
fn test_tokens_and_message() {
    let (items, message) = collect("key=s n=d ptr=p data=*s trailing text here");
    let tokens: Vec<Token> = items.into_iter().map(Result::unwrap).collect();
    assert_eq!(
        tokens,
        vec![
            Token { key: b"key", value_type: ValueType::Str },
            Token { key: b"n", value_type: ValueType::Int },
            Token { key: b"ptr", value_type: ValueType::Pointer },
            Token { key: b"data", value_type: ValueType::Bytes },
        ]
    );
    assert_eq!(message.as_deref(), Some(&b"trailing text here"[..]));
}

#[test]
fn test_message_leading_spaces_stripped() {
    let (items, message) = collect("a=s    hi there");
    assert_eq!(items.len(), 1);
    assert_eq!(message.as_deref(), Some(&b"hi there"[..]));
}

#[test]
fn test_no_message() {
    let (items, message) = collect("a=s   ");
    assert_eq!(items.len(), 1);
    assert_eq!(message, None);

    let (items, message) = collect("");
    assert!(items.is_empty());
    assert_eq!(message, None);
}

#[test]
fn test_message_only() {
    let (items, message) = collect("just text");
    assert!(items.is_empty());
    assert_eq!(message.as_deref(), Some(&b"just text"[..]));
}

#[test]
fn test_single_word_message() {
    let (items, message) = collect("a=d done");
    assert_eq!(items.len(), 1);
    assert_eq!(message.as_deref(), Some(&b"done"[..]));
}

#[test]
fn test_empty_key_starts_message() {
    let (items, message) = collect("a=s =oops");
    assert_eq!(items.len(), 1);
    assert_eq!(message.as_deref(), Some(&b"=oops"[..]));
}

#[test]
fn test_unknown_type_ends_iteration() {
    let (items, _) = collect("a=x b=s");
    assert_eq!(items, vec![Err(FormatError::UnknownType { position: 2 })]);
}

#[test]
fn test_empty_type() {
    let (items, _) = collect("a=s b= c=d");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1], Err(FormatError::EmptyType { position: 6 }));
}

#[test]
fn test_validate_format() {
    assert_eq!(validate_format("a=s b=*s c=d p=p some message"), Ok(4));
    assert_eq!(validate_format("no tokens at all"), Ok(0));
    assert_eq!(
        validate_format("a=d b=q"),
        Err(FormatError::UnknownType { position: 6 })
    );
}
