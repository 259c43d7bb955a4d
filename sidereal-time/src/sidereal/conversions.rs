use super::{GST, LST};

impl From<LST> for GST {
    fn from(lst: LST) -> GST {
        lst.to_gst()
    }
}
