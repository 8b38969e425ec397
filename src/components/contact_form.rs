use yew::prelude::*;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use rootprowler::config::ContactTiming;
use rootprowler::lifecycle::Liveness;

#[derive(Clone, Copy, PartialEq)]
enum FormStatus {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Default, PartialEq)]
struct FormData {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub timing: ContactTiming,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let timing = props.timing;
    let form = use_state(FormData::default);
    let status = use_state(|| FormStatus::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let live = use_memo(|_| Liveness::new(), ());

    {
        let live = live.clone();
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(move |_| {
            move || {
                live.revoke();
                reset_timer.borrow_mut().take();
            }
        }, ());
    }

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        let live = live.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status != FormStatus::Idle {
                return;
            }
            status.set(FormStatus::Submitting);

            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let live = (*live).clone();
            spawn_local(async move {
                // No transport behind this form, just the pause.
                TimeoutFuture::new(timing.submit_delay_ms).await;
                if !live.is_alive() {
                    return;
                }
                log!("Contact form marked as sent");
                status.set(FormStatus::Submitted);

                let timeout = Timeout::new(timing.reset_delay_ms, move || {
                    status.set(FormStatus::Idle);
                    form.set(FormData::default());
                });
                *reset_timer.borrow_mut() = Some(timeout);
            });
        })
    };

    let on_field = |apply: fn(&mut FormData, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_input = |apply: fn(&mut FormData, String)| {
        let update = on_field(apply);
        Callback::from(move |e: InputEvent| {
            update(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_message = {
        let update = on_field(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            update(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let button_label = match *status {
        FormStatus::Idle => "Send Message",
        FormStatus::Submitting => "Sending...",
        FormStatus::Submitted => "Message Sent!",
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                placeholder="Your Name"
                value={form.name.clone()}
                oninput={on_input(|f, v| f.name = v)}
                required=true
            />
            <input
                type="email"
                placeholder="Your Email"
                value={form.email.clone()}
                oninput={on_input(|f, v| f.email = v)}
                required=true
            />
            <input
                type="text"
                placeholder="Subject"
                value={form.subject.clone()}
                oninput={on_input(|f, v| f.subject = v)}
                required=true
            />
            <textarea
                placeholder="Your Message"
                rows="6"
                value={form.message.clone()}
                oninput={on_message}
                required=true
            />
            <button type="submit" class="contact-submit" disabled={*status != FormStatus::Idle}>
                {button_label}
            </button>
        </form>
    }
}
