#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let decoder = dsv::SaveDecoder::new();
    let header = decoder.decode_header(data);
    let save = decoder.decode_slice(data);

    // A save that decodes must have a header that decodes on its own
    if let Ok(save) = save {
        assert_eq!(header.ok(), Some(save.header));
    }

    let strict = dsv::SaveDecoder::builder()
        .verify_stream_length(true)
        .reject_trailing_data(true)
        .build();
    if let Err(e) = strict.decode_slice(data) {
        let _ = e.to_string();
        assert!(e.offset().map_or(true, |x| x <= data.len()));
    }
});
