//! File types produced by the Java emitter.

mod processor_java;

pub use processor_java::ProcessorFile;
