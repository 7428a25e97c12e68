use loaders::news::sample_articles;
use yew::prelude::*;

use crate::components::NewsReport;
use crate::hooks::use_title;

#[function_component]
pub fn ReportSamplePage() -> Html {
    use_title("Sample report");
    let articles = use_memo((), |_| sample_articles());

    html! {
        <div class="w-full min-h-screen">
            <NewsReport articles={(*articles).clone()} />
        </div>
    }
}
