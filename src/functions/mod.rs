mod human_readable_bytesize;

pub use human_readable_bytesize::human_readable_bytesize as human_readable_bytesize;
