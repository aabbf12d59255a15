#![no_main]

use libfuzzer_sys::fuzz_target;

use ibp::interpreter::Interpreter;
use ibp::source::ByteSource;

fuzz_target!(|data: &[u8]| {
    // The input doubles as the byte source and as the command text
    let mut interp = Interpreter::new();
    let _ = interp.load(ByteSource::from_bytes("fuzz", data.to_vec()));
    let len = data.len();

    for line in String::from_utf8_lossy(data).lines() {
        // `ld` would touch the filesystem
        if line.trim_start().starts_with("ld") {
            continue;
        }
        let _ = interp.execute(line);
        // We don't care about the result - we're looking for panics and a
        // cursor that escapes the source
        let position = interp.position().expect("source stays loaded");
        assert!(position <= len);
    }
});
