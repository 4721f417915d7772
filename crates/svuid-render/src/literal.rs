use svuid_types::LiteralFormat;

pub fn render_literal(value: i64, format: LiteralFormat) -> String {
    match format {
        LiteralFormat::Decimal => value.to_string(),
        LiteralFormat::Hex => format!("{:#018x}", value as u64),
        LiteralFormat::Kotlin | LiteralFormat::Java => format!("{value}L"),
        LiteralFormat::KotlinField => {
            format!("private const val serialVersionUID: Long = {value}L")
        }
        LiteralFormat::JavaField => {
            format!("private static final long serialVersionUID = {value}L;")
        }
    }
}
