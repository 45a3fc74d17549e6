use crate::{column_map::ColumnMap, error::FilterError, filter::DataFilter, source_type::SourceType};

/// Interface a stream client uses to drive and query its filter.
pub trait TableFilter {
    fn set_branch_db(&mut self, db: &str);

    fn compile(&mut self, source_type: SourceType) -> Result<bool, FilterError>;

    /// The filter string sent to the store, if compiled.
    fn compiled(&self) -> Option<&str>;

    fn is_all_match(&self) -> bool;

    fn requirement_map(&self) -> &ColumnMap;

    fn reflection_map(&self) -> &ColumnMap;
}

impl TableFilter for DataFilter {
    fn set_branch_db(&mut self, db: &str) {
        DataFilter::set_branch_db(self, db);
    }

    fn compile(&mut self, source_type: SourceType) -> Result<bool, FilterError> {
        DataFilter::compile(self, source_type)
    }

    fn compiled(&self) -> Option<&str> {
        DataFilter::compiled(self)
    }

    fn is_all_match(&self) -> bool {
        DataFilter::is_all_match(self)
    }

    fn requirement_map(&self) -> &ColumnMap {
        DataFilter::requirement_map(self)
    }

    fn reflection_map(&self) -> &ColumnMap {
        DataFilter::reflection_map(self)
    }
}
