#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(v) = fog_vint::decode(data) {
        let mut enc = Vec::new();
        fog_vint::append(&mut enc, v);
        assert_eq!(&data[..enc.len()], &enc[..], "decoded value must re-encode to its input");
        assert_eq!(fog_vint::read(&mut &data[..]).ok(), Some(v));
    }

    let mut parser = fog_vint::Parser::new(data);
    loop {
        let start = parser.remaining();
        match parser.next() {
            Some(Ok(v)) => {
                let mut enc = Vec::new();
                fog_vint::append(&mut enc, v);
                assert_eq!(&start[..enc.len()], &enc[..], "parsed value must re-encode to its input");
                assert_eq!(parser.remaining().len(), start.len() - enc.len());
            }
            Some(Err(_)) => {
                assert!(parser.next().is_none(), "parser must stop after an error");
                break;
            }
            None => {
                assert!(start.is_empty());
                break;
            }
        }
    }
});
