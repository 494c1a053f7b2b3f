/// Joins class tokens into a single attribute value separated by one space.
pub fn join_class_list(class_list: &[String]) -> String {
    class_list.join(" ")
}
