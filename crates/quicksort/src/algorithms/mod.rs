pub(crate) mod common;
pub(crate) mod quick_sort;
pub(crate) mod quick_sort_3way;
pub(crate) mod randomized_quick_sort;
