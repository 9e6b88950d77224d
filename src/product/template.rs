/// Number of demo products generated per run
pub const PRODUCT_COUNT: usize = 50;

pub fn description_file_name(index: usize) -> String {
    format!("{}.txt", index)
}

pub fn title_file_name(index: usize) -> String {
    format!("{}.png", index)
}

/// Description text for product `index`. The index appears once, in the
/// heading line.
pub fn render_description(index: usize) -> String {
    format!(
        "# 종건급 Product {} description

진자 개지리는 종건급 상품입니다.

와우 너무 개지림

와 진짜 이거 왜 안씀??

님들 진자 후회하는거임

종건급 상품 개지립니다.

우주 최강 종건급 상품 ~~",
        index
    )
}
