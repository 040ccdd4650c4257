mod directory_class_source;
mod file_directive;

pub(crate) use directory_class_source::DirectoryClassSource;
pub(crate) use file_directive::FileDirective;
