/// Test modules for twconf
///
/// Tests are organized into logical groupings:
/// - glob: content glob pattern lexer, parser, and matcher tests
mod glob;
