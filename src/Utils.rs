//! utility modules used by the demo binary and by embedding applications
/// simplelog initialisation: console and/or file logger
pub mod logger;
/// PolyConfig: session settings read from a task_parser document
pub mod settings;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
