fn main() {
    // Generate the fixture enum for integration tests
    // The generated code is only used by tests (via include!), so it won't
    // affect normal library compilation
    enumgen_codegen::generate_from_cargo_metadata().expect("enum generation failed");
}
