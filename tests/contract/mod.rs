//! Contract tests pinning the on-disk format and the reserved-name rules

mod test_reserved_section;
