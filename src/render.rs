// src/render.rs
use crate::form;
use crate::types::{ChurnLabel, CustomerRecord, Prediction};

const STYLE: &str = r#"
body { font-family: "Segoe UI", sans-serif; margin: 0; background: #fafafa; color: #262730; }
.wrap { display: flex; max-width: 1100px; margin: 0 auto; padding: 1.5rem; gap: 2rem; }
main { flex: 3; } aside { flex: 1; }
h1 { margin-top: 0; }
hr { border: none; border-top: 1px solid #e0e0e0; margin: 1.2rem 0; }
.cols { display: grid; grid-template-columns: 1fr 1fr; gap: 0 2rem; }
label { display: block; margin: 0.6rem 0 0.2rem; font-size: 0.9rem; }
select, input[type=number] { width: 100%; padding: 0.35rem; box-sizing: border-box; }
input[type=range] { width: 100%; }
button {
    width: 100%; background-color: #FF4B4B; color: white; font-weight: bold;
    padding: 0.5rem; border: none; border-radius: 10px; cursor: pointer; font-size: 1rem;
}
.prediction-box {
    padding: 1.5rem; border-radius: 10px; text-align: center;
    font-size: 1.3rem; font-weight: bold;
}
.churn { background-color: #ffebee; color: #c62828; }
.no-churn { background-color: #e8f5e9; color: #2e7d32; }
.metrics { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 1rem; margin: 1rem 0; }
.metric { background: white; border: 1px solid #e0e0e0; border-radius: 10px; padding: 1rem; text-align: center; }
.metric .value { font-size: 1.6rem; font-weight: bold; }
.chart { display: flex; align-items: flex-end; gap: 2rem; height: 200px; margin: 1rem 0; padding: 0 2rem; }
.bar { flex: 1; text-align: center; align-self: stretch; display: flex; flex-direction: column; justify-content: flex-end; }
.bar .fill { border-radius: 4px 4px 0 0; }
.bar.stay .fill { background: #2ecc71; }
.bar.churn-bar .fill { background: #e74c3c; }
.note { border-radius: 10px; padding: 1rem; margin: 1rem 0; }
.warning { background: #fff3cd; color: #856404; }
.success { background: #d4edda; color: #155724; }
.error { background: #ffebee; color: #c62828; }
.info { background: #e3f2fd; color: #0d47a1; border-radius: 10px; padding: 1rem; font-size: 0.9rem; }
.caption { color: #8a8a8a; font-size: 0.8rem; }
"#;

// Keeps TotalCharges at tenure * monthly until the user edits it.
const TOTAL_SYNC_JS: &str = r#"
const tenure = document.getElementById('tenure');
const tenureOut = document.getElementById('tenure_out');
const monthly = document.getElementById('monthly_charges');
const total = document.getElementById('total_charges');
const overridden = document.getElementById('total_overridden');
function syncTotal() {
    tenureOut.textContent = tenure.value;
    if (overridden.value !== 'true') {
        const derived = Number(tenure.value) * Number(monthly.value);
        total.value = Math.min(derived, Number(total.max)).toFixed(1);
    }
}
tenure.addEventListener('input', syncTotal);
monthly.addEventListener('input', syncTotal);
total.addEventListener('input', () => { overridden.value = 'true'; });
syncTotal();
"#;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(body: &str, script: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>Churn Prediction</title><style>{STYLE}</style></head>\
         <body>{body}<script>{script}</script></body></html>"
    )
}

fn select(label: &str, name: &str, options: &[(&str, &str)], selected: &str) -> String {
    let opts: String = options
        .iter()
        .map(|(value, text)| {
            let sel = if *value == selected { " selected" } else { "" };
            format!("<option value=\"{}\"{sel}>{}</option>", escape(value), escape(text))
        })
        .collect();
    format!("<label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\">{opts}</select>")
}

fn choice(label: &str, name: &str, domain: &[&str], default: &str) -> String {
    let options: Vec<(&str, &str)> = domain.iter().map(|v| (*v, *v)).collect();
    select(label, name, &options, default)
}

fn sidebar() -> String {
    "<aside><div class=\"info\"><h3>Model Info</h3>\
     <p><b>Churn classifier</b></p>\
     <ul><li>Test accuracy: ~77%</li><li>Training: 7,043 customers</li>\
     <li>Features: 19 attributes</li></ul></div>\
     <div class=\"info\" style=\"margin-top:1rem\"><h3>Top Predictors</h3>\
     <ul><li>Contract type</li><li>Tenure duration</li><li>Monthly charges</li>\
     <li>Internet service</li><li>Payment method</li></ul></div>\
     <hr><p class=\"caption\">Served by churnscore-rs</p></aside>"
        .to_string()
}

pub fn form_page() -> String {
    let left = format!(
        "<h3>Demographics</h3>{}{}{}{}<h3>Services</h3>{}{}{}{}{}",
        choice("Gender", "gender", form::GENDER, "Female"),
        select(
            "Senior Citizen",
            "senior_citizen",
            &[("0", "No"), ("1", "Yes")],
            "0",
        ),
        choice("Partner", "partner", form::YES_NO, "Yes"),
        choice("Dependents", "dependents", form::YES_NO, "Yes"),
        choice("Phone Service", "phone_service", form::YES_NO, "Yes"),
        choice("Multiple Lines", "multiple_lines", form::MULTIPLE_LINES, "No"),
        choice("Internet Service", "internet_service", form::INTERNET_SERVICE, "DSL"),
        choice("Online Security", "online_security", form::INTERNET_ADDON, "No"),
        choice("Online Backup", "online_backup", form::INTERNET_ADDON, "No"),
    );

    let tenure_default = form::TENURE_DEFAULT;
    let tenure_max = form::TENURE_MAX;
    let monthly = format!(
        "<label for=\"monthly_charges\">Monthly Charges ($)</label>\
         <input type=\"number\" id=\"monthly_charges\" name=\"monthly_charges\" \
         min=\"0\" max=\"{}\" step=\"{}\" value=\"{}\">",
        form::MONTHLY_MAX,
        form::MONTHLY_STEP,
        form::MONTHLY_DEFAULT,
    );
    let total = format!(
        "<label for=\"total_charges\">Total Charges ($)</label>\
         <input type=\"number\" id=\"total_charges\" name=\"total_charges\" \
         min=\"0\" max=\"{}\" step=\"{}\" value=\"{}\">\
         <input type=\"hidden\" id=\"total_overridden\" name=\"total_overridden\" value=\"false\">",
        form::TOTAL_MAX,
        form::TOTAL_STEP,
        form::derived_total(form::TENURE_DEFAULT, form::MONTHLY_DEFAULT),
    );
    let right = format!(
        "{}{}{}{}<h3>Account</h3>\
         <label for=\"tenure\">Tenure (months): <output id=\"tenure_out\">{tenure_default}</output></label>\
         <input type=\"range\" id=\"tenure\" name=\"tenure\" min=\"0\" max=\"{tenure_max}\" value=\"{tenure_default}\">\
         {}{}{}{monthly}{total}",
        choice("Device Protection", "device_protection", form::INTERNET_ADDON, "No"),
        choice("Tech Support", "tech_support", form::INTERNET_ADDON, "No"),
        choice("Streaming TV", "streaming_tv", form::INTERNET_ADDON, "No"),
        choice("Streaming Movies", "streaming_movies", form::INTERNET_ADDON, "No"),
        choice("Contract", "contract", form::CONTRACT, "Month-to-month"),
        choice("Paperless Billing", "paperless_billing", form::YES_NO, "Yes"),
        choice("Payment Method", "payment_method", form::PAYMENT_METHOD, "Electronic check"),
    );

    let body = format!(
        "<div class=\"wrap\"><main><h1>Customer Churn Prediction</h1>\
         <p>Predict customer churn with machine learning</p><hr>\
         <form method=\"post\" action=\"/predict\">\
         <div class=\"cols\"><div>{left}</div><div>{right}</div></div>\
         <hr><button type=\"submit\">Predict Churn</button></form></main>{}</div>",
        sidebar()
    );
    page(&body, TOTAL_SYNC_JS)
}

fn bar(class: &str, label: &str, p: f64) -> String {
    format!(
        "<div class=\"bar {class}\"><div style=\"flex:1\"></div>\
         <div class=\"fill\" style=\"height:{:.0}%\"></div><div>{label}<br>{:.3}</div></div>",
        p * 100.0,
        p
    )
}

pub fn result_page(record: &CustomerRecord, prediction: &Prediction) -> String {
    let (box_class, box_text) = match prediction.label {
        ChurnLabel::Churn => ("churn", "WILL CHURN"),
        ChurnLabel::Stay => ("no-churn", "WILL STAY"),
    };
    let recommendation = match prediction.label {
        ChurnLabel::Churn => {
            "<div class=\"note warning\"><b>At Risk:</b> Offer retention incentives, \
             upgrade to longer contract, provide better support</div>"
        }
        ChurnLabel::Stay => {
            "<div class=\"note success\"><b>Low Risk:</b> Continue excellent service, \
             send surveys, offer loyalty benefits</div>"
        }
    };

    let body = format!(
        "<div class=\"wrap\"><main><h1>Customer Churn Prediction</h1><hr>\
         <div class=\"metrics\">\
         <div class=\"prediction-box {box_class}\">{box_text}</div>\
         <div class=\"metric\">Confidence<div class=\"value\">{:.1}%</div></div>\
         <div class=\"metric\">Risk Level<div class=\"value\">{}</div></div>\
         </div>\
         <h3>Prediction Probabilities</h3>\
         <div class=\"chart\">{}{}</div>\
         {recommendation}\
         <p class=\"caption\">Contract: {} &middot; Tenure: {} months &middot; Monthly: ${:.2}</p>\
         <hr><a href=\"/\">&larr; New prediction</a></main>{}</div>",
        prediction.confidence * 100.0,
        prediction.risk,
        bar("stay", "No Churn", prediction.proba[0]),
        bar("churn-bar", "Churn", prediction.proba[1]),
        escape(&record.contract),
        record.tenure,
        record.monthly_charges,
        sidebar()
    );
    page(&body, "")
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<div class=\"wrap\"><main><h1>Customer Churn Prediction</h1>\
         <div class=\"note error\"><b>Prediction failed:</b> {}</div>\
         <a href=\"/\">&larr; Back to form</a></main></div>",
        escape(message)
    );
    page(&body, "")
}

pub fn unavailable_page(reason: &str) -> String {
    let body = format!(
        "<div class=\"wrap\"><main><h1>Customer Churn Prediction</h1>\
         <div class=\"note error\">{}</div></main></div>",
        escape(reason)
    );
    page(&body, "")
}
